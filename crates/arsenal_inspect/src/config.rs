//! # Inspect Configuration
//!
//! Loaded once at startup from a TOML file. Every section is optional.
//!
//! ```toml
//! [input]
//! format = "hex"
//!
//! [report]
//! show_reserved = false
//! reload_points = 7
//!
//! [addons]
//! "105" = "trap_launcher"
//! ```
//!
//! Addon indices move with every client build, so the `[addons]` table
//! belongs to a config file per build rather than to the code.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::derived::MAX_RELOAD_POINTS;
use crate::dump::DumpFormat;
use crate::error::{InspectError, InspectResult};

/// Top-level configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InspectConfig {
    /// How dumps are read.
    pub input: InputConfig,
    /// What reports show.
    pub report: ReportConfig,
    /// Addon index (as a string key) to label.
    pub addons: BTreeMap<String, String>,
}

/// `[input]` section.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InputConfig {
    /// Dump encoding.
    pub format: DumpFormat,
}

/// `[report]` section.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    /// Print the opaque words (`_unknown*`, `reserved[*]`).
    pub show_reserved: bool,
    /// Reload stat points used for the derived reload ticks (0-15).
    pub reload_points: u8,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            show_reserved: true,
            reload_points: 0,
        }
    }
}

impl InspectConfig {
    /// Parses a config document.
    ///
    /// # Errors
    ///
    /// Returns the TOML error on malformed input or unknown keys.
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(text)?;
        config.report.reload_points = config.report.reload_points.min(MAX_RELOAD_POINTS);
        Ok(config)
    }

    /// Loads a config file.
    ///
    /// # Errors
    ///
    /// [`InspectError::Io`] if the file cannot be read,
    /// [`InspectError::Toml`] if it does not parse.
    pub fn load(path: &Path) -> InspectResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| InspectError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text).map_err(|source| InspectError::Toml {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(
            "Loaded config {} ({} addon labels)",
            path.display(),
            config.addons.len()
        );
        Ok(config)
    }
}
