//! bis-planner - best-in-slot gear planning library
//!
//! Item catalog, scoring, upgrade classification and per-session gear state
//! for a class-based gear planner. Presentation is left to the caller.

pub mod build_info;
pub mod character;
pub mod core;
pub mod error;
pub mod items;
pub mod utils;

pub use character::classes::{CharacterClass, ClassId, ClassRoster};
pub use crate::core::{PlannerData, PlannerSession};
pub use error::CatalogError;
pub use items::catalog::Catalog;
pub use items::equipment::{equip, GearSet};
pub use items::scoring::score_item;
pub use items::search::search_items;
pub use items::stats::{diff_stats, StatBlock, StatType};
pub use items::types::{Item, ItemId, ItemQuality, ItemSlot};
pub use items::upgrade::{classify_upgrade, UpgradeVerdict};
