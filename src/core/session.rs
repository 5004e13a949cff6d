//! Per-session state of the gear view for one class.

use crate::character::classes::ClassId;
use crate::error::CatalogError;
use crate::items::catalog::Catalog;
use crate::items::equipment::GearSet;
use crate::items::stats::StatBlock;
use crate::items::types::{Item, ItemSlot};
use crate::items::upgrade::{recommend_upgrade, recommend_upgrades, UpgradeRecommendation};
use std::sync::Arc;
use tracing::debug;

use super::planner_data::PlannerData;

/// Gear picked so far for one class, plus the slot currently being edited.
///
/// Starts empty and is dropped with the session; nothing here is saved.
#[derive(Debug, Clone)]
pub struct PlannerSession {
    class_id: ClassId,
    catalog: Arc<Catalog>,
    gear: GearSet,
    selected_slot: Option<ItemSlot>,
    last_equipped: Option<Item>,
}

impl PlannerSession {
    pub fn new(class_id: ClassId, catalog: Arc<Catalog>) -> Self {
        Self {
            class_id,
            catalog,
            gear: GearSet::new(),
            selected_slot: None,
            last_equipped: None,
        }
    }

    /// Opens a session for `class_id` if that class can be planned for.
    pub fn open(data: &PlannerData, class_id: &str) -> Result<Self, CatalogError> {
        let catalog = data.catalog(class_id)?;
        Ok(Self::new(ClassId::new(class_id), catalog))
    }

    pub fn class_id(&self) -> &ClassId {
        &self.class_id
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn gear(&self) -> &GearSet {
        &self.gear
    }

    pub fn selected_slot(&self) -> Option<ItemSlot> {
        self.selected_slot
    }

    /// The item most recently equipped, for the "item equipped" notice.
    pub fn last_equipped(&self) -> Option<&Item> {
        self.last_equipped.as_ref()
    }

    pub fn select_slot(&mut self, slot: ItemSlot) {
        self.selected_slot = Some(slot);
    }

    pub fn clear_selection(&mut self) {
        self.selected_slot = None;
    }

    /// Equips into `slot`, returning the item it replaced.
    pub fn equip(&mut self, slot: ItemSlot, item: Item) -> Option<Item> {
        debug!(class = %self.class_id, %slot, item = %item.id, "equip");
        self.last_equipped = Some(item.clone());
        self.gear.set(slot, Some(item))
    }

    /// Equips into the selected slot and closes the selection.
    ///
    /// Returns `None` without equipping when no slot is selected.
    pub fn equip_selected(&mut self, item: Item) -> Option<ItemSlot> {
        let slot = self.selected_slot.take()?;
        self.equip(slot, item);
        Some(slot)
    }

    pub fn unequip(&mut self, slot: ItemSlot) -> Option<Item> {
        debug!(class = %self.class_id, %slot, "unequip");
        self.gear.unequip(slot)
    }

    pub fn total_stats(&self) -> StatBlock {
        self.gear.total_stats()
    }

    pub fn recommendation(&self, slot: ItemSlot) -> Option<UpgradeRecommendation> {
        recommend_upgrade(&self.catalog, &self.gear, slot)
    }

    pub fn recommendations(&self) -> Vec<UpgradeRecommendation> {
        recommend_upgrades(&self.catalog, &self.gear)
    }
}
