//! Locating and loading the planner data file.
//!
//! Lookup order: an explicit path, then `$BIS_PLANNER_CATALOG`, then
//! `~/.bis-planner/catalog.json`, then the sample data built into the crate.

use crate::core::constants::{CATALOG_DIR_NAME, CATALOG_ENV_VAR, CATALOG_FILE_NAME};
use crate::core::planner_data::PlannerData;
use crate::error::CatalogError;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Where planner data came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    Explicit(PathBuf),
    Environment(PathBuf),
    UserFile(PathBuf),
    Embedded,
}

impl CatalogSource {
    pub fn path(&self) -> Option<&Path> {
        match self {
            CatalogSource::Explicit(p) | CatalogSource::Environment(p) | CatalogSource::UserFile(p) => {
                Some(p.as_path())
            }
            CatalogSource::Embedded => None,
        }
    }
}

/// Get the ~/.bis-planner/ directory path.
pub fn planner_dir() -> io::Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    Ok(home_dir.join(CATALOG_DIR_NAME))
}

pub fn user_catalog_path() -> io::Result<PathBuf> {
    Ok(planner_dir()?.join(CATALOG_FILE_NAME))
}

/// Picks a source from the given candidates. The user file only counts if it exists.
pub fn resolve_catalog_source(
    explicit: Option<&Path>,
    env_value: Option<PathBuf>,
    user_file: Option<PathBuf>,
) -> CatalogSource {
    if let Some(path) = explicit {
        return CatalogSource::Explicit(path.to_path_buf());
    }
    if let Some(path) = env_value.filter(|p| !p.as_os_str().is_empty()) {
        return CatalogSource::Environment(path);
    }
    match user_file {
        Some(path) if path.is_file() => CatalogSource::UserFile(path),
        _ => CatalogSource::Embedded,
    }
}

/// Resolves against the real environment and home directory.
pub fn detect_catalog_source(explicit: Option<&Path>) -> CatalogSource {
    let env_value = std::env::var_os(CATALOG_ENV_VAR).map(PathBuf::from);
    let user_file = match user_catalog_path() {
        Ok(path) => Some(path),
        Err(e) => {
            warn!("skipping user catalog lookup: {}", e);
            None
        }
    };
    resolve_catalog_source(explicit, env_value, user_file)
}

pub fn load_from_path(path: &Path) -> Result<PlannerData, CatalogError> {
    let json = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    PlannerData::from_json(&json)
}

pub fn load_from_source(source: &CatalogSource) -> Result<PlannerData, CatalogError> {
    match source.path() {
        Some(path) => {
            info!(path = %path.display(), "loading catalog file");
            load_from_path(path)
        }
        None => {
            info!("using built-in sample catalog");
            PlannerData::sample()
        }
    }
}

pub fn load_planner_data(explicit: Option<&Path>) -> Result<PlannerData, CatalogError> {
    load_from_source(&detect_catalog_source(explicit))
}
