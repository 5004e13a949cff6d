//! Playable classes and the roster shown on the class selection screen.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassId(pub String);

impl ClassId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterClass {
    pub id: ClassId,
    pub name: String,
    /// Disabled classes are listed but cannot be planned for yet.
    #[serde(default)]
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// Classes in declaration order. Ids are unique.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassRoster {
    classes: Vec<CharacterClass>,
}

impl ClassRoster {
    /// Returns the first duplicated id as the error.
    pub fn new(classes: Vec<CharacterClass>) -> Result<Self, ClassId> {
        for (i, class) in classes.iter().enumerate() {
            if classes[..i].iter().any(|c| c.id == class.id) {
                return Err(class.id.clone());
            }
        }
        Ok(Self { classes })
    }

    pub fn iter(&self) -> impl Iterator<Item = &CharacterClass> {
        self.classes.iter()
    }

    pub fn get(&self, id: &str) -> Option<&CharacterClass> {
        self.classes.iter().find(|c| c.id.as_str() == id)
    }

    pub fn enabled(&self) -> impl Iterator<Item = &CharacterClass> {
        self.classes.iter().filter(|c| c.enabled)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}
