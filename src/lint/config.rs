//! Lint configuration

use serde::{Deserialize, Serialize};

/// Lint configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LintConfig {
    /// Slide id checks configuration
    pub identity: IdentityConfig,
    /// Text content checks configuration
    pub content: ContentConfig,
    /// Button declaration checks configuration
    pub buttons: ButtonsConfig,
}

/// Slide id checking configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdentityConfig {
    /// Enable identity checks
    pub enabled: bool,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Text content checking configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContentConfig {
    /// Enable content checks
    pub enabled: bool,
    /// Maximum body length (characters) before it is likely to overflow the panel
    pub max_body_length: usize,
    /// Maximum header length (characters)
    pub max_header_length: usize,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_body_length: 400,
            max_header_length: 60,
        }
    }
}

/// Button declaration checking configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ButtonsConfig {
    /// Enable button checks
    pub enabled: bool,
    /// Report custom actions the controller does not interpret
    pub report_custom_actions: bool,
}

impl Default for ButtonsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            report_custom_actions: true,
        }
    }
}
