//! Integration test: class selection -> catalog -> equip -> recommendations.
//!
//! Runs against the built-in sample data the same way the CLI does.

use bis_planner::core::PlannerSession;
use bis_planner::items::{equip, GearSet, ItemId, ItemSlot, StatType, UpgradeVerdict};
use bis_planner::{CatalogError, PlannerData};

fn sample() -> PlannerData {
    PlannerData::sample().expect("sample data must load")
}

fn rogue() -> PlannerSession {
    PlannerSession::open(&sample(), "rogue").expect("rogue is playable")
}

// =========================================================================
// Class roster
// =========================================================================

#[test]
fn test_roster_lists_classes_in_order() {
    let data = sample();
    let ids: Vec<&str> = data.roster().iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["rogue", "warrior"]);
}

#[test]
fn test_warrior_is_coming_soon() {
    let data = sample();
    assert!(matches!(
        data.catalog("warrior"),
        Err(CatalogError::ClassDisabled(_))
    ));
    assert!(matches!(
        PlannerSession::open(&data, "shaman"),
        Err(CatalogError::UnknownClass(_))
    ));
}

// =========================================================================
// Lookup and search
// =========================================================================

#[test]
fn test_best_in_slot_lookup() {
    let session = rogue();
    let head = session.catalog().lookup_best_in_slot(ItemSlot::Head).unwrap();
    assert_eq!(head.name, "Bloodfang Hood");
    assert!(session.catalog().lookup_best_in_slot(ItemSlot::Shoulders).is_none());
}

#[test]
fn test_best_in_slot_for_neck() {
    let session = rogue();
    let neck = session.catalog().lookup_best_in_slot(ItemSlot::Neck).unwrap();
    assert_eq!(neck.id, ItemId::new("2"));
}

#[test]
fn test_search_head_slot() {
    let session = rogue();
    let catalog = session.catalog();

    let all: Vec<&str> = catalog
        .search("", ItemSlot::Head)
        .iter()
        .map(|i| i.id.as_str())
        .collect();
    assert_eq!(all, vec!["101", "1", "102"]);

    let molten: Vec<&str> = catalog
        .search("MOLTEN core", ItemSlot::Head)
        .iter()
        .map(|i| i.name.as_str())
        .collect();
    assert_eq!(molten, vec!["Crown of Endless Knowledge"]);

    assert!(catalog.search("zzz-no-match", ItemSlot::Head).is_empty());
    assert!(catalog.search_slot_id("", "not-a-slot").is_empty());
}

// =========================================================================
// Gear and recommendations
// =========================================================================

#[test]
fn test_value_style_equip_round() {
    let session = rogue();
    let mask = session.catalog().find(&ItemId::new("102")).cloned().unwrap();
    let hood = session.catalog().find(&ItemId::new("1")).cloned().unwrap();

    let gear = equip(GearSet::new(), ItemSlot::Head, Some(mask));
    let gear = equip(gear, ItemSlot::Head, Some(hood));
    assert_eq!(gear.len(), 1);
    assert_eq!(gear.get(ItemSlot::Head).unwrap().id, ItemId::new("1"));

    let gear = equip(gear, ItemSlot::Head, None);
    assert!(gear.get(ItemSlot::Head).is_none());
}

#[test]
fn test_full_planning_flow() {
    let mut session = rogue();
    let catalog = session.catalog().clone();

    // Empty gear: every curated slot is a major upgrade
    assert!(session
        .recommendations()
        .iter()
        .all(|r| r.verdict == UpgradeVerdict::Major && r.current.is_none()));

    // Pick the dungeon mask through the slot dialog
    session.select_slot(ItemSlot::Head);
    let mask = catalog.search("unforgiven", ItemSlot::Head)[0].clone();
    session.equip_selected(mask);

    // Pendant is the BiS neck already
    let pendant = catalog.lookup_best_in_slot(ItemSlot::Neck).cloned().unwrap();
    session.equip(ItemSlot::Neck, pendant);

    let recs = session.recommendations();
    assert_eq!(recs.len(), 2);

    // Mask 84.5 -> Bloodfang 135
    let head = &recs[0];
    assert_eq!(head.slot, ItemSlot::Head);
    assert_eq!(head.verdict, UpgradeVerdict::Major);
    assert_eq!(head.current.as_ref().unwrap().id, ItemId::new("102"));

    let neck = &recs[1];
    assert!(neck.is_equipped());
    assert_eq!(neck.verdict, UpgradeVerdict::None);
    assert!(neck.stat_changes.iter().all(|row| row.difference == 0.0));

    let totals = session.total_stats();
    assert_eq!(totals.get(StatType::Agility), 45.0);
    assert_eq!(totals.get(StatType::Stamina), 35.0);
    assert_eq!(totals.get(StatType::Hit), 1.0);
    assert!((session.gear().total_score() - 154.5).abs() < 1e-9);
}

#[test]
fn test_crown_to_bloodfang_stat_rows() {
    let mut session = rogue();
    let crown = session.catalog().find(&ItemId::new("101")).cloned().unwrap();
    session.equip(ItemSlot::Head, crown);

    let rec = session.recommendation(ItemSlot::Head).unwrap();
    let rows: Vec<(StatType, f64)> = rec
        .stat_changes
        .iter()
        .map(|row| (row.stat, row.difference))
        .collect();
    assert_eq!(
        rows,
        vec![
            (StatType::Stamina, 3.0),
            (StatType::Agility, 10.0),
            (StatType::CriticalStrike, 1.0),
            (StatType::Hit, 1.0),
        ]
    );
}
