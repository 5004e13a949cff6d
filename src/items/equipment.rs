use super::scoring::score_item;
use super::stats::StatBlock;
use super::types::{Item, ItemSlot};
use std::collections::BTreeMap;

/// Items currently assigned to a character's equipment slots.
///
/// At most one item per slot; a missing key is an empty slot. The set lives
/// only as long as the planning session that owns it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GearSet {
    slots: BTreeMap<ItemSlot, Item>,
}

impl GearSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, slot: ItemSlot) -> Option<&Item> {
        self.slots.get(&slot)
    }

    /// Puts `item` in `slot`, or empties the slot when `item` is `None`.
    /// Returns whatever was equipped there before.
    pub fn set(&mut self, slot: ItemSlot, item: Option<Item>) -> Option<Item> {
        match item {
            Some(item) => self.slots.insert(slot, item),
            None => self.slots.remove(&slot),
        }
    }

    pub fn unequip(&mut self, slot: ItemSlot) -> Option<Item> {
        self.slots.remove(&slot)
    }

    pub fn is_equipped(&self, slot: ItemSlot) -> bool {
        self.slots.contains_key(&slot)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Equipped items in slot order.
    pub fn iter_equipped(&self) -> impl Iterator<Item = (ItemSlot, &Item)> {
        self.slots.iter().map(|(&slot, item)| (slot, item))
    }

    /// Sum of every equipped item's stats.
    pub fn total_stats(&self) -> StatBlock {
        let mut total = StatBlock::new();
        for item in self.slots.values() {
            total += &item.stats;
        }
        total
    }

    pub fn total_score(&self) -> f64 {
        self.slots.values().map(score_item).sum()
    }
}

/// Value-style equip: returns the set with `slot` replaced or cleared.
pub fn equip(mut gear: GearSet, slot: ItemSlot, item: Option<Item>) -> GearSet {
    gear.set(slot, item);
    gear
}
