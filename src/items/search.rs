use super::catalog::Catalog;
use super::types::{Item, ItemSlot};

/// Items for `slot` whose name or source location contains `query`,
/// ignoring case. An empty query matches everything. Catalog order is kept.
pub fn search_items<'a>(catalog: &'a Catalog, query: &str, slot: ItemSlot) -> Vec<&'a Item> {
    let query = query.to_lowercase();
    catalog
        .items(slot)
        .iter()
        .filter(|item| matches_query(item, &query))
        .collect()
}

fn matches_query(item: &Item, lowered_query: &str) -> bool {
    item.name.to_lowercase().contains(lowered_query)
        || item.source.location.to_lowercase().contains(lowered_query)
}
