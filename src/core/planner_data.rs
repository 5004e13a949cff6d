//! Class roster plus one catalog per playable class, loaded from JSON.

use crate::character::classes::{CharacterClass, ClassId, ClassRoster};
use crate::error::CatalogError;
use crate::items::catalog::{Catalog, CatalogData};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tracing::{debug, info};

/// Sample data compiled into the binary, used when no catalog file is found.
pub const SAMPLE_CATALOG_JSON: &str = include_str!("../../data/catalog.json");

/// On-disk layout of a planner data file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannerFile {
    #[serde(default)]
    pub classes: Vec<CharacterClass>,
    #[serde(default)]
    pub catalogs: BTreeMap<ClassId, CatalogData>,
}

/// Validated planner data. Immutable once loaded; catalogs are shared.
#[derive(Debug, Clone)]
pub struct PlannerData {
    roster: ClassRoster,
    catalogs: HashMap<ClassId, Arc<Catalog>>,
}

impl PlannerData {
    pub fn from_file(file: PlannerFile) -> Result<Self, CatalogError> {
        let roster = ClassRoster::new(file.classes).map_err(CatalogError::DuplicateClass)?;

        let mut catalogs = HashMap::new();
        for (class_id, data) in file.catalogs {
            if roster.get(class_id.as_str()).is_none() {
                return Err(CatalogError::CatalogForUnknownClass(class_id));
            }
            let catalog = Catalog::from_data(data)?;
            debug!(class = %class_id, items = catalog.len(), "loaded class catalog");
            catalogs.insert(class_id, Arc::new(catalog));
        }

        info!(
            classes = roster.len(),
            catalogs = catalogs.len(),
            "planner data ready"
        );
        Ok(Self { roster, catalogs })
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let file: PlannerFile = serde_json::from_str(json)?;
        Self::from_file(file)
    }

    pub fn sample() -> Result<Self, CatalogError> {
        Self::from_json(SAMPLE_CATALOG_JSON)
    }

    pub fn roster(&self) -> &ClassRoster {
        &self.roster
    }

    /// The catalog for a class the user picked.
    ///
    /// Fails for unknown classes, disabled ("coming soon") classes and
    /// classes nobody has curated a catalog for.
    pub fn catalog(&self, class_id: &str) -> Result<Arc<Catalog>, CatalogError> {
        let class = self
            .roster
            .get(class_id)
            .ok_or_else(|| CatalogError::UnknownClass(class_id.to_string()))?;
        if !class.enabled {
            return Err(CatalogError::ClassDisabled(class.id.clone()));
        }
        self.catalogs
            .get(&class.id)
            .cloned()
            .ok_or_else(|| CatalogError::MissingCatalog(class.id.clone()))
    }

    /// First enabled class that has a catalog.
    pub fn default_class(&self) -> Option<&CharacterClass> {
        self.roster
            .enabled()
            .find(|class| self.catalogs.contains_key(&class.id))
    }
}
