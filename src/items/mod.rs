//! Item system: types, stats, scoring, catalog, search and gear.

pub mod catalog;
#[cfg(feature = "debounce")]
pub mod debounce;
pub mod equipment;
pub mod scoring;
pub mod search;
pub mod stats;
pub mod types;
pub mod upgrade;

pub use catalog::*;
pub use equipment::*;
pub use scoring::*;
pub use search::*;
pub use stats::*;
pub use types::*;
pub use upgrade::*;
