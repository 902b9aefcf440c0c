use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info};

use crate::model::{CategoryError, CategoryRegistry, StepConfig};

/// Environment variable naming a config file
pub const CONFIG_ENV: &str = "CONTYPE_CONFIG";

/// Error type for loading and validating configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error(transparent)]
    Category(#[from] CategoryError),
    #[error("default category {0} is not defined")]
    UnknownDefaultCategory(String),
    #[error("invalid word count bounds: min {min}, max {max}, step {step}")]
    InvalidWordCountBounds { min: u32, max: u32, step: u32 },
}

/// A validated configuration, ready to seed a step
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: StepConfig,
    pub registry: Arc<CategoryRegistry>,
    /// Category selected when the step is entered
    pub initial_category: String,
    /// File the config came from, if any
    pub source: Option<PathBuf>,
}

/// Per-user config location, e.g. `~/.config/contype/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("contype").join("config.toml"))
}

/// Pick the config file: explicit flag, then `CONTYPE_CONFIG`, then the
/// per-user file if it exists. `None` means built-in defaults.
pub fn resolve_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    if let Some(env) = std::env::var_os(CONFIG_ENV).filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(env));
    }
    default_config_path().filter(|p| p.is_file())
}

/// Read and parse a config file without validating it.
pub fn read_config(path: &Path) -> Result<StepConfig, ConfigError> {
    let text = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_config(&text)
}

pub fn parse_config(text: &str) -> Result<StepConfig, ConfigError> {
    Ok(toml::from_str(text)?)
}

/// Check invariants and build the registry.
pub fn validate(config: StepConfig, source: Option<PathBuf>) -> Result<LoadedConfig, ConfigError> {
    let bounds = config.word_count;
    if !bounds.is_valid() {
        return Err(ConfigError::InvalidWordCountBounds {
            min: bounds.min,
            max: bounds.max,
            step: bounds.step,
        });
    }

    let registry = if config.categories.is_empty() {
        CategoryRegistry::builtin()
    } else {
        CategoryRegistry::from_categories(config.categories.clone())?
    };

    let initial_category = match &config.step.default_category {
        Some(id) if registry.contains(id) => id.clone(),
        Some(id) => return Err(ConfigError::UnknownDefaultCategory(id.clone())),
        None => registry
            .first_id()
            .map(str::to_string)
            .ok_or(CategoryError::NoCategories)?,
    };

    debug!(
        categories = registry.len(),
        initial = %initial_category,
        "config validated"
    );

    Ok(LoadedConfig {
        config,
        registry: Arc::new(registry),
        initial_category,
        source,
    })
}

/// Resolve, read and validate the configuration.
pub fn load_config(explicit: Option<&Path>) -> Result<LoadedConfig, ConfigError> {
    match resolve_config_path(explicit) {
        Some(path) => {
            let config = read_config(&path)?;
            info!(path = %path.display(), "loaded config");
            validate(config, Some(path))
        }
        None => validate(StepConfig::default(), None),
    }
}
