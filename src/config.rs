//! Tutorial configuration
//!
//! Settings a host would otherwise wire by hand: the fallback Next label,
//! narration clips per slide and lint thresholds. Every field has a default,
//! so an empty JSON object is a valid configuration.

use crate::controller::DEFAULT_NEXT_LABEL;
use crate::lint::config::LintConfig;
use crate::narration::NarrationEntry;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TutorialConfig {
    /// Label for Next when a slide declares no button
    pub default_next_label: String,
    pub narration: NarrationConfig,
    pub lint: LintConfig,
}

impl Default for TutorialConfig {
    fn default() -> Self {
        Self {
            default_next_label: DEFAULT_NEXT_LABEL.to_string(),
            narration: NarrationConfig::default(),
            lint: LintConfig::default(),
        }
    }
}

/// Narration clips, scanned in order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct NarrationConfig {
    pub entries: Vec<NarrationEntry>,
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

impl TutorialConfig {
    /// Parse configuration from JSON text
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Read and parse a configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&raw)
    }
}
