//! Upgrade classification and per-slot best-in-slot recommendations.

use super::catalog::Catalog;
use super::equipment::GearSet;
use super::scoring::score_item;
use super::stats::{compare_stats, StatComparison};
use super::types::{Item, ItemSlot};
use crate::core::constants::MAJOR_UPGRADE_THRESHOLD;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UpgradeVerdict {
    None,
    Minor,
    Major,
}

impl UpgradeVerdict {
    pub fn name(&self) -> &'static str {
        match self {
            UpgradeVerdict::None => "No upgrade",
            UpgradeVerdict::Minor => "Minor upgrade",
            UpgradeVerdict::Major => "Major upgrade",
        }
    }

    pub fn is_upgrade(&self) -> bool {
        !matches!(self, UpgradeVerdict::None)
    }
}

/// Buckets a score change. A zero current score makes any gain major.
pub fn classify_scores(current_score: f64, candidate_score: f64) -> UpgradeVerdict {
    let delta = candidate_score - current_score;
    if delta <= 0.0 {
        UpgradeVerdict::None
    } else if delta > current_score * MAJOR_UPGRADE_THRESHOLD {
        UpgradeVerdict::Major
    } else {
        UpgradeVerdict::Minor
    }
}

pub fn classify_upgrade(current: &Item, candidate: &Item) -> UpgradeVerdict {
    classify_scores(score_item(current), score_item(candidate))
}

/// How the curated item for a slot compares with what is equipped there.
#[derive(Debug, Clone, PartialEq)]
pub struct UpgradeRecommendation {
    pub slot: ItemSlot,
    pub current: Option<Item>,
    pub best_in_slot: Item,
    pub verdict: UpgradeVerdict,
    pub stat_changes: Vec<StatComparison>,
}

impl UpgradeRecommendation {
    /// True when the best-in-slot item is already equipped.
    pub fn is_equipped(&self) -> bool {
        self.current
            .as_ref()
            .is_some_and(|item| item.id == self.best_in_slot.id)
    }
}

/// `None` when the catalog has no curated item for `slot`.
///
/// An empty slot scores 0.
pub fn recommend_upgrade(
    catalog: &Catalog,
    gear: &GearSet,
    slot: ItemSlot,
) -> Option<UpgradeRecommendation> {
    let bis = catalog.lookup_best_in_slot(slot)?;
    let current = gear.get(slot);

    let current_score = current.map(score_item).unwrap_or(0.0);
    let verdict = classify_scores(current_score, score_item(bis));
    let stat_changes = compare_stats(current.map(|item| &item.stats), &bis.stats);

    Some(UpgradeRecommendation {
        slot,
        current: current.cloned(),
        best_in_slot: bis.clone(),
        verdict,
        stat_changes,
    })
}

/// Recommendations for every curated slot, in slot order.
pub fn recommend_upgrades(catalog: &Catalog, gear: &GearSet) -> Vec<UpgradeRecommendation> {
    ItemSlot::ALL
        .into_iter()
        .filter_map(|slot| recommend_upgrade(catalog, gear, slot))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::stats::{StatBlock, StatType};
    use crate::items::types::{ItemId, ItemQuality, ItemSource, SourceType};

    fn create_test_item(id: &str, slot: ItemSlot, agility: f64) -> Item {
        Item {
            id: ItemId::new(id),
            name: format!("Item {id}"),
            quality: ItemQuality::Epic,
            item_level: 70,
            required_level: 60,
            slot,
            icon_url: None,
            stats: StatBlock::new().with(StatType::Agility, agility),
            source: ItemSource {
                kind: SourceType::Raid,
                location: "Molten Core".to_string(),
                drop_rate: Some(15.0),
            },
        }
    }

    #[test]
    fn test_classify_scores_thresholds() {
        assert_eq!(classify_scores(100.0, 125.0), UpgradeVerdict::Major);
        assert_eq!(classify_scores(100.0, 110.0), UpgradeVerdict::Minor);
        // Exactly 20% is still minor
        assert_eq!(classify_scores(100.0, 120.0), UpgradeVerdict::Minor);
        assert_eq!(classify_scores(100.0, 100.0), UpgradeVerdict::None);
        assert_eq!(classify_scores(100.0, 90.0), UpgradeVerdict::None);
    }

    #[test]
    fn test_zero_current_score_makes_any_gain_major() {
        assert_eq!(classify_scores(0.0, 0.5), UpgradeVerdict::Major);
        assert_eq!(classify_scores(0.0, 0.0), UpgradeVerdict::None);
    }

    #[test]
    fn test_self_comparison_is_never_an_upgrade() {
        let item = create_test_item("1", ItemSlot::Head, 40.0);
        assert_eq!(classify_upgrade(&item, &item), UpgradeVerdict::None);
    }

    #[test]
    fn test_classify_upgrade_uses_item_scores() {
        // 40 agi = 100, 50 agi = 125
        let current = create_test_item("1", ItemSlot::Head, 40.0);
        let candidate = create_test_item("2", ItemSlot::Head, 50.0);
        assert_eq!(classify_upgrade(&current, &candidate), UpgradeVerdict::Major);
        assert_eq!(classify_upgrade(&candidate, &current), UpgradeVerdict::None);
    }

    #[test]
    fn test_verdict_helpers() {
        assert!(!UpgradeVerdict::None.is_upgrade());
        assert!(UpgradeVerdict::Minor.is_upgrade());
        assert_eq!(UpgradeVerdict::Major.name(), "Major upgrade");
    }

    #[test]
    fn test_recommendation_for_empty_slot_is_major() {
        let bis = create_test_item("bis", ItemSlot::Head, 40.0);
        let catalog = Catalog::builder()
            .item(bis.clone())
            .best_in_slot(ItemSlot::Head, ItemId::new("bis"))
            .build()
            .expect("catalog should build");

        let rec = recommend_upgrade(&catalog, &GearSet::new(), ItemSlot::Head)
            .expect("head has a curated item");
        assert_eq!(rec.verdict, UpgradeVerdict::Major);
        assert!(rec.current.is_none());
        assert!(!rec.is_equipped());
        assert_eq!(rec.stat_changes.len(), 1);
        assert_eq!(rec.stat_changes[0].difference, 40.0);
    }

    #[test]
    fn test_recommendation_when_bis_equipped() {
        let bis = create_test_item("bis", ItemSlot::Head, 40.0);
        let catalog = Catalog::builder()
            .item(bis.clone())
            .best_in_slot(ItemSlot::Head, ItemId::new("bis"))
            .build()
            .expect("catalog should build");

        let mut gear = GearSet::new();
        gear.set(ItemSlot::Head, Some(bis));

        let rec = recommend_upgrade(&catalog, &gear, ItemSlot::Head).unwrap();
        assert_eq!(rec.verdict, UpgradeVerdict::None);
        assert!(rec.is_equipped());
    }

    #[test]
    fn test_uncurated_slot_has_no_recommendation() {
        let catalog = Catalog::builder()
            .item(create_test_item("1", ItemSlot::Head, 40.0))
            .build()
            .unwrap();
        assert!(recommend_upgrade(&catalog, &GearSet::new(), ItemSlot::Head).is_none());
        assert!(recommend_upgrades(&catalog, &GearSet::new()).is_empty());
    }

    #[test]
    fn test_recommendations_in_slot_order() {
        let catalog = Catalog::builder()
            .item(create_test_item("neck", ItemSlot::Neck, 20.0))
            .item(create_test_item("head", ItemSlot::Head, 40.0))
            .best_in_slot(ItemSlot::Neck, ItemId::new("neck"))
            .best_in_slot(ItemSlot::Head, ItemId::new("head"))
            .build()
            .unwrap();

        let slots: Vec<ItemSlot> = recommend_upgrades(&catalog, &GearSet::new())
            .iter()
            .map(|r| r.slot)
            .collect();
        assert_eq!(slots, vec![ItemSlot::Head, ItemSlot::Neck]);
    }
}
