//! Per-entity edit-distance thresholds.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Maximum acceptable edit distance per entity type.
///
/// Callers pass these into each lookup; the matcher holds no configuration
/// of its own. Driver queries tolerate more noise than team or race names
/// because full names are longer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    pub driver: usize,
    pub constructor: usize,
    pub race: usize,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            driver: 4,
            constructor: 2,
            race: 2,
        }
    }
}

impl Thresholds {
    /// Load thresholds from a TOML file. Keys not present keep their
    /// defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }
}
