use crate::character::classes::ClassId;
use crate::items::types::{ItemId, ItemSlot};
use std::io;
use std::path::PathBuf;

/// Problems found while loading planner data. Queries against a loaded
/// catalog never fail.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("item {0} appears more than once")]
    DuplicateItemId(ItemId),

    #[error("item {id} is listed under {listed} but its slot is {actual}")]
    SlotMismatch {
        id: ItemId,
        listed: ItemSlot,
        actual: ItemSlot,
    },

    #[error("item {id} has invalid {stat} value {value}")]
    InvalidStat {
        id: ItemId,
        stat: &'static str,
        value: f64,
    },

    #[error("item {id} has drop rate {value}, expected 0-100")]
    InvalidDropRate { id: ItemId, value: f64 },

    #[error("best-in-slot for {slot} names item {id}, which is not listed for that slot")]
    UnknownBestInSlot { slot: ItemSlot, id: ItemId },

    #[error("class {0} is declared more than once")]
    DuplicateClass(ClassId),

    #[error("catalog given for undeclared class {0}")]
    CatalogForUnknownClass(ClassId),

    #[error("unknown class: {0}")]
    UnknownClass(String),

    #[error("class {0} is not available yet")]
    ClassDisabled(ClassId),

    #[error("class {0} has no catalog")]
    MissingCatalog(ClassId),
}
