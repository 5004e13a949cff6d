//! Delayed catalog search for interactive search boxes.
//!
//! Every keystroke starts a new request; only the latest request that
//! survives the debounce delay produces results. Closing the dialog
//! (`dismiss`) drops whatever is still in flight.

use super::catalog::Catalog;
use super::types::{Item, ItemSlot};
use crate::core::constants::SEARCH_DEBOUNCE;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::trace;

pub struct DebouncedSearch {
    catalog: Arc<Catalog>,
    delay: Duration,
    latest: AtomicU64,
}

impl DebouncedSearch {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self::with_delay(catalog, SEARCH_DEBOUNCE)
    }

    pub fn with_delay(catalog: Arc<Catalog>, delay: Duration) -> Self {
        Self {
            catalog,
            delay,
            latest: AtomicU64::new(0),
        }
    }

    /// Waits out the delay, then searches. `None` if a newer request or a
    /// dismiss arrived in the meantime.
    pub async fn search(&self, query: &str, slot: ItemSlot) -> Option<Vec<Item>> {
        let ticket = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        tokio::time::sleep(self.delay).await;

        if self.latest.load(Ordering::SeqCst) != ticket {
            trace!(query, %slot, "search superseded");
            return None;
        }
        Some(self.catalog.search(query, slot).into_iter().cloned().collect())
    }

    /// Discards any in-flight search.
    pub fn dismiss(&self) {
        self.latest.fetch_add(1, Ordering::SeqCst);
    }
}
