use std::time::Duration;

// Stat weights for item scoring. Stats without an entry weigh 1.0.
pub const AGILITY_WEIGHT: f64 = 2.5;
pub const HIT_WEIGHT: f64 = 3.0;
pub const CRITICAL_STRIKE_WEIGHT: f64 = 2.0;
pub const STRENGTH_WEIGHT: f64 = 1.0;
pub const STAMINA_WEIGHT: f64 = 1.0;
pub const ATTACK_POWER_WEIGHT: f64 = 1.0;
pub const DEFAULT_STAT_WEIGHT: f64 = 1.0;

/// A score gain above this fraction of the current item's score is a major upgrade.
pub const MAJOR_UPGRADE_THRESHOLD: f64 = 0.2;

/// Delay applied by the debounced catalog search before it runs.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

// Catalog file resolution
pub const CATALOG_ENV_VAR: &str = "BIS_PLANNER_CATALOG";
pub const CATALOG_DIR_NAME: &str = ".bis-planner";
pub const CATALOG_FILE_NAME: &str = "catalog.json";

/// Upper bound for an item source's drop rate, in percent.
pub const MAX_DROP_RATE: f64 = 100.0;
