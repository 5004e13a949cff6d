use super::stats::StatBlock;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// The sixteen equipment positions a character can fill.
///
/// Declaration order is the order slots are listed, iterated and reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemSlot {
    Head,
    Neck,
    Shoulders,
    Back,
    Chest,
    Wrists,
    Hands,
    Waist,
    Legs,
    Feet,
    Ring1,
    Ring2,
    Trinket1,
    Trinket2,
    MainHand,
    OffHand,
}

impl ItemSlot {
    pub const ALL: [ItemSlot; 16] = [
        ItemSlot::Head,
        ItemSlot::Neck,
        ItemSlot::Shoulders,
        ItemSlot::Back,
        ItemSlot::Chest,
        ItemSlot::Wrists,
        ItemSlot::Hands,
        ItemSlot::Waist,
        ItemSlot::Legs,
        ItemSlot::Feet,
        ItemSlot::Ring1,
        ItemSlot::Ring2,
        ItemSlot::Trinket1,
        ItemSlot::Trinket2,
        ItemSlot::MainHand,
        ItemSlot::OffHand,
    ];

    /// Stable identifier used in catalog files and on the command line.
    pub fn id(&self) -> &'static str {
        match self {
            ItemSlot::Head => "head",
            ItemSlot::Neck => "neck",
            ItemSlot::Shoulders => "shoulders",
            ItemSlot::Back => "back",
            ItemSlot::Chest => "chest",
            ItemSlot::Wrists => "wrists",
            ItemSlot::Hands => "hands",
            ItemSlot::Waist => "waist",
            ItemSlot::Legs => "legs",
            ItemSlot::Feet => "feet",
            ItemSlot::Ring1 => "ring1",
            ItemSlot::Ring2 => "ring2",
            ItemSlot::Trinket1 => "trinket1",
            ItemSlot::Trinket2 => "trinket2",
            ItemSlot::MainHand => "mainhand",
            ItemSlot::OffHand => "offhand",
        }
    }

    /// Returns the display name for this slot.
    pub fn name(&self) -> &'static str {
        match self {
            ItemSlot::Head => "Head",
            ItemSlot::Neck => "Neck",
            ItemSlot::Shoulders => "Shoulders",
            ItemSlot::Back => "Back",
            ItemSlot::Chest => "Chest",
            ItemSlot::Wrists => "Wrists",
            ItemSlot::Hands => "Hands",
            ItemSlot::Waist => "Waist",
            ItemSlot::Legs => "Legs",
            ItemSlot::Feet => "Feet",
            ItemSlot::Ring1 => "Ring 1",
            ItemSlot::Ring2 => "Ring 2",
            ItemSlot::Trinket1 => "Trinket 1",
            ItemSlot::Trinket2 => "Trinket 2",
            ItemSlot::MainHand => "Main Hand",
            ItemSlot::OffHand => "Off Hand",
        }
    }

    /// Whether an item made for `item_slot` can be worn here. Rings and
    /// trinkets fit either slot of their pair.
    pub fn accepts(self, item_slot: ItemSlot) -> bool {
        self == item_slot
            || matches!(
                (self, item_slot),
                (ItemSlot::Ring1, ItemSlot::Ring2)
                    | (ItemSlot::Ring2, ItemSlot::Ring1)
                    | (ItemSlot::Trinket1, ItemSlot::Trinket2)
                    | (ItemSlot::Trinket2, ItemSlot::Trinket1)
            )
    }
}

impl fmt::Display for ItemSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown equipment slot: {0}")]
pub struct UnknownSlot(pub String);

impl FromStr for ItemSlot {
    type Err = UnknownSlot;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ItemSlot::ALL
            .into_iter()
            .find(|slot| slot.id() == s)
            .ok_or_else(|| UnknownSlot(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemQuality {
    Poor = 0,
    Common = 1,
    Uncommon = 2,
    Rare = 3,
    Epic = 4,
    Legendary = 5,
}

impl ItemQuality {
    /// Returns the display name for this quality tier.
    pub fn name(&self) -> &'static str {
        match self {
            ItemQuality::Poor => "Poor",
            ItemQuality::Common => "Common",
            ItemQuality::Uncommon => "Uncommon",
            ItemQuality::Rare => "Rare",
            ItemQuality::Epic => "Epic",
            ItemQuality::Legendary => "Legendary",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    Raid,
    Dungeon,
    Quest,
    Crafting,
    Pvp,
}

impl SourceType {
    pub fn name(&self) -> &'static str {
        match self {
            SourceType::Raid => "Raid",
            SourceType::Dungeon => "Dungeon",
            SourceType::Quest => "Quest",
            SourceType::Crafting => "Crafting",
            SourceType::Pvp => "PvP",
        }
    }
}

/// Where an item comes from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemSource {
    #[serde(rename = "type")]
    pub kind: SourceType,
    pub location: String,
    /// Percentage in 0..=100, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drop_rate: Option<f64>,
}

/// Opaque, stable item identifier.
///
/// Catalog files may write ids as strings or as non-negative integers; both
/// are kept as text, so `1` and `"1"` name the same item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ItemId(pub String);

impl<'de> Deserialize<'de> for ItemId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(u64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(id) => ItemId(id),
            RawId::Number(n) => ItemId(n.to_string()),
        })
    }
}

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub quality: ItemQuality,
    pub item_level: u32,
    pub required_level: u32,
    pub slot: ItemSlot,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    #[serde(default)]
    pub stats: StatBlock,
    pub source: ItemSource,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::stats::StatType;

    #[test]
    fn test_quality_ordering() {
        assert!(ItemQuality::Poor < ItemQuality::Common);
        assert!(ItemQuality::Common < ItemQuality::Uncommon);
        assert!(ItemQuality::Uncommon < ItemQuality::Rare);
        assert!(ItemQuality::Rare < ItemQuality::Epic);
        assert!(ItemQuality::Epic < ItemQuality::Legendary);
    }

    #[test]
    fn test_quality_name() {
        assert_eq!(ItemQuality::Poor.name(), "Poor");
        assert_eq!(ItemQuality::Legendary.name(), "Legendary");
    }

    #[test]
    fn test_slot_ids_parse_back() {
        for slot in ItemSlot::ALL {
            assert_eq!(slot.id().parse::<ItemSlot>(), Ok(slot));
        }
    }

    #[test]
    fn test_slot_parse_is_exact() {
        assert!("MainHand".parse::<ItemSlot>().is_err());
        assert!("HEAD".parse::<ItemSlot>().is_err());
        assert!(" head".parse::<ItemSlot>().is_err());
        assert!(serde_json::from_str::<ItemSlot>(r#""HEAD""#).is_err());
    }

    #[test]
    fn test_unknown_slot_rejected() {
        let err = "tabard".parse::<ItemSlot>().unwrap_err();
        assert_eq!(err, UnknownSlot("tabard".to_string()));
        assert_eq!(err.to_string(), "unknown equipment slot: tabard");
    }

    #[test]
    fn test_paired_slots_accept_each_other() {
        assert!(ItemSlot::Ring2.accepts(ItemSlot::Ring1));
        assert!(ItemSlot::Ring1.accepts(ItemSlot::Ring2));
        assert!(ItemSlot::Trinket1.accepts(ItemSlot::Trinket2));
        assert!(ItemSlot::Head.accepts(ItemSlot::Head));
        assert!(!ItemSlot::Ring1.accepts(ItemSlot::Trinket1));
        assert!(!ItemSlot::MainHand.accepts(ItemSlot::OffHand));
    }

    #[test]
    fn test_slot_display_names() {
        assert_eq!(ItemSlot::Ring1.name(), "Ring 1");
        assert_eq!(ItemSlot::MainHand.name(), "Main Hand");
        assert_eq!(ItemSlot::OffHand.to_string(), "offhand");
    }

    #[test]
    fn test_item_deserializes_from_catalog_json() {
        let json = r#"{
            "id": "1",
            "name": "Bloodfang Hood",
            "quality": "epic",
            "itemLevel": 76,
            "requiredLevel": 60,
            "slot": "head",
            "iconUrl": "/item-icons/head.png",
            "stats": { "agility": 40, "stamina": 28, "criticalStrike": 2, "hit": 1 },
            "source": { "type": "raid", "location": "Blackwing Lair - Nefarian", "dropRate": 15 }
        }"#;

        let item: Item = serde_json::from_str(json).expect("item should parse");
        assert_eq!(item.id, ItemId::new("1"));
        assert_eq!(item.quality, ItemQuality::Epic);
        assert_eq!(item.slot, ItemSlot::Head);
        assert_eq!(item.item_level, 76);
        assert_eq!(item.source.kind, SourceType::Raid);
        assert_eq!(item.source.drop_rate, Some(15.0));
        assert_eq!(item.stats.get(StatType::Agility), 40.0);
        assert_eq!(item.stats.get(StatType::Spirit), 0.0);
    }

    #[test]
    fn test_item_without_stats_or_drop_rate() {
        let json = r#"{
            "id": "crafted-1",
            "name": "Plain Cloak",
            "quality": "common",
            "itemLevel": 10,
            "requiredLevel": 5,
            "slot": "back",
            "source": { "type": "crafting", "location": "Tailoring" }
        }"#;

        let item: Item = serde_json::from_str(json).expect("item should parse");
        assert!(item.stats.is_empty());
        assert!(item.source.drop_rate.is_none());
        assert!(item.icon_url.is_none());
    }

    #[test]
    fn test_numeric_item_id_read_as_text() {
        let json = r#"{
            "id": 1, "name": "Bloodfang Hood", "quality": "epic",
            "itemLevel": 76, "requiredLevel": 60, "slot": "head",
            "source": { "type": "raid", "location": "Blackwing Lair" }
        }"#;
        let item: Item = serde_json::from_str(json).expect("numeric id should parse");
        assert_eq!(item.id, ItemId::new("1"));
        assert_eq!(serde_json::to_string(&item.id).unwrap(), r#""1""#);
    }

    #[test]
    fn test_invalid_item_id_types_rejected() {
        assert!(serde_json::from_str::<ItemId>("-3").is_err());
        assert!(serde_json::from_str::<ItemId>("1.5").is_err());
        assert!(serde_json::from_str::<ItemId>("null").is_err());
    }

    #[test]
    fn test_negative_item_level_rejected() {
        let json = r#"{
            "id": "x", "name": "Broken", "quality": "poor",
            "itemLevel": -1, "requiredLevel": 1, "slot": "head",
            "source": { "type": "quest", "location": "Nowhere" }
        }"#;
        assert!(serde_json::from_str::<Item>(json).is_err());
    }
}
