use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::category::Category;
use super::word_count::WordCountBounds;

/// Configuration from config.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StepConfig {
    #[serde(default)]
    pub step: StepInfo,
    #[serde(default)]
    pub word_count: WordCountBounds,
    #[serde(default)]
    pub ui: UiConfig,
    /// Replaces the built-in registry when non-empty
    #[serde(default)]
    pub categories: Vec<Category>,
}

/// Labels shown in the header and the category selected on entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepInfo {
    #[serde(default = "default_workspace")]
    pub workspace: String,
    #[serde(default = "default_campaign")]
    pub campaign: String,
    #[serde(default = "default_profile")]
    pub profile: String,
    /// Falls back to the first registry category when absent
    #[serde(default)]
    pub default_category: Option<String>,
}

impl Default for StepInfo {
    fn default() -> Self {
        StepInfo {
            workspace: default_workspace(),
            campaign: default_campaign(),
            profile: default_profile(),
            default_category: None,
        }
    }
}

fn default_workspace() -> String {
    "Media management".into()
}

fn default_campaign() -> String {
    "Draft campaign".into()
}

fn default_profile() -> String {
    "Usman".into()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Terminal width (columns) at which the wide layout kicks in
    #[serde(default = "default_wide_min_width")]
    pub wide_min_width: u16,
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            wide_min_width: default_wide_min_width(),
            show_key_hints: true,
            colors: HashMap::new(),
        }
    }
}

fn default_wide_min_width() -> u16 {
    88
}

fn default_true() -> bool {
    true
}
