//! # Addon Function Table
//!
//! Labels for the addon indices of one client build, built from the
//! `[addons]` config section and injected into reports through
//! [`AddonResolver`].

use std::collections::{BTreeMap, HashMap};

use arsenal_core::{AddonIndex, AddonResolver};

use crate::error::{InspectError, InspectResult};

/// Addon index to label map for one client build.
#[derive(Clone, Debug, Default)]
pub struct FunctionTable {
    labels: HashMap<AddonIndex, String>,
}

impl FunctionTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from config labels keyed by decimal index.
    ///
    /// # Errors
    ///
    /// [`InspectError::InvalidAddonKey`] if a key is not an `i32`.
    pub fn from_labels(labels: &BTreeMap<String, String>) -> InspectResult<Self> {
        let mut table = Self::new();
        for (key, label) in labels {
            let raw: i32 = key
                .trim()
                .parse()
                .map_err(|_| InspectError::InvalidAddonKey(key.clone()))?;
            table.insert(AddonIndex::new(raw), label.clone());
        }
        Ok(table)
    }

    /// Adds or replaces a label.
    pub fn insert(&mut self, index: AddonIndex, label: impl Into<String>) {
        self.labels.insert(index, label.into());
    }

    /// Number of labelled indices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns true if no index is labelled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl AddonResolver for FunctionTable {
    type Addon = str;

    fn resolve(&self, index: AddonIndex) -> Option<&str> {
        self.labels.get(&index).map(String::as_str)
    }
}
