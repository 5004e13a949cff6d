//! The read-only item catalog and its best-in-slot table.

use super::search::search_items;
use super::types::{Item, ItemId, ItemSlot};
use crate::core::constants::MAX_DROP_RATE;
use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use tracing::debug;

/// Catalog as it appears in a configuration file, before validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogData {
    #[serde(default)]
    pub items: BTreeMap<ItemSlot, Vec<Item>>,
    #[serde(default)]
    pub best_in_slot: BTreeMap<ItemSlot, ItemId>,
}

/// Candidate items per slot plus the curated best-in-slot pick for each slot.
///
/// Built once from [`CatalogData`] and never mutated afterwards. Every
/// best-in-slot entry points at an item in that slot's own list.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    items: BTreeMap<ItemSlot, Vec<Item>>,
    // slot -> index into items[slot]
    best_in_slot: BTreeMap<ItemSlot, usize>,
}

impl Catalog {
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    pub fn from_data(data: CatalogData) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for (&listed, items) in &data.items {
            for item in items {
                validate_item(item, listed)?;
                if !seen.insert(item.id.clone()) {
                    return Err(CatalogError::DuplicateItemId(item.id.clone()));
                }
            }
        }

        let mut best_in_slot = BTreeMap::new();
        for (&slot, id) in &data.best_in_slot {
            let index = data
                .items
                .get(&slot)
                .and_then(|items| items.iter().position(|item| &item.id == id))
                .ok_or_else(|| CatalogError::UnknownBestInSlot {
                    slot,
                    id: id.clone(),
                })?;
            best_in_slot.insert(slot, index);
        }

        debug!(
            items = seen.len(),
            curated_slots = best_in_slot.len(),
            "catalog built"
        );

        Ok(Self {
            items: data.items,
            best_in_slot,
        })
    }

    /// All candidates for `slot`, in declaration order.
    pub fn items(&self, slot: ItemSlot) -> &[Item] {
        self.items.get(&slot).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The curated pick for `slot`, or `None` if nobody has chosen one yet.
    pub fn lookup_best_in_slot(&self, slot: ItemSlot) -> Option<&Item> {
        let index = *self.best_in_slot.get(&slot)?;
        self.items.get(&slot)?.get(index)
    }

    pub fn curated_slots(&self) -> impl Iterator<Item = ItemSlot> + '_ {
        self.best_in_slot.keys().copied()
    }

    pub fn find(&self, id: &ItemId) -> Option<&Item> {
        self.items.values().flatten().find(|item| &item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn search(&self, query: &str, slot: ItemSlot) -> Vec<&Item> {
        search_items(self, query, slot)
    }

    /// Search keyed by a raw slot identifier; unknown slots match nothing.
    pub fn search_slot_id(&self, query: &str, slot_id: &str) -> Vec<&Item> {
        match slot_id.parse::<ItemSlot>() {
            Ok(slot) => self.search(query, slot),
            Err(_) => Vec::new(),
        }
    }
}

fn validate_item(item: &Item, listed: ItemSlot) -> Result<(), CatalogError> {
    if item.slot != listed {
        return Err(CatalogError::SlotMismatch {
            id: item.id.clone(),
            listed,
            actual: item.slot,
        });
    }

    if let Some((stat, value)) = item
        .stats
        .iter()
        .find(|(_, value)| !value.is_finite() || *value < 0.0)
    {
        return Err(CatalogError::InvalidStat {
            id: item.id.clone(),
            stat: stat.name(),
            value,
        });
    }

    if let Some(rate) = item.source.drop_rate {
        if !(0.0..=MAX_DROP_RATE).contains(&rate) {
            return Err(CatalogError::InvalidDropRate {
                id: item.id.clone(),
                value: rate,
            });
        }
    }

    Ok(())
}

/// Assembles a catalog in code; items land under their own slot.
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    data: CatalogData,
}

impl CatalogBuilder {
    pub fn item(mut self, item: Item) -> Self {
        self.data.items.entry(item.slot).or_default().push(item);
        self
    }

    pub fn best_in_slot(mut self, slot: ItemSlot, id: ItemId) -> Self {
        self.data.best_in_slot.insert(slot, id);
        self
    }

    pub fn build(self) -> Result<Catalog, CatalogError> {
        Catalog::from_data(self.data)
    }
}
