use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;
use std::path::Path;

use crate::core::ranking::DEFAULT_LIMIT;
use crate::models::FitLevel;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub fit: FitSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_limit")]
    pub default_limit: usize,
    /// Largest actor pool accepted by the matcher
    pub max_actors: Option<usize>,
    /// Largest task pool accepted by the matcher
    pub max_tasks: Option<usize>,
    #[serde(default = "default_validate_inputs")]
    pub validate_inputs: bool,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            max_actors: None,
            max_tasks: None,
            validate_inputs: default_validate_inputs(),
        }
    }
}

fn default_limit() -> usize { DEFAULT_LIMIT }
fn default_validate_inputs() -> bool { true }

/// Score thresholds for fit levels
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct FitSettings {
    #[serde(default = "default_strong_fit")]
    pub strong: u32,
    #[serde(default = "default_moderate_fit")]
    pub moderate: u32,
}

impl Default for FitSettings {
    fn default() -> Self {
        Self {
            strong: default_strong_fit(),
            moderate: default_moderate_fit(),
        }
    }
}

impl FitSettings {
    pub fn classify(&self, score: u32) -> FitLevel {
        if score >= self.strong {
            FitLevel::Strong
        } else if score >= self.moderate {
            FitLevel::Moderate
        } else {
            FitLevel::Weak
        }
    }
}

fn default_strong_fit() -> u32 { 80 }
fn default_moderate_fit() -> u32 { 60 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from files and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the structs
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with SKILL_MATCH__), read after `.env`
    pub fn load() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();

        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., SKILL_MATCH__MATCHING__MAX_ACTORS -> matching.max_actors
            .add_source(environment())
            .build()?
            .try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?
            .try_deserialize()
    }

    /// Parse configuration from a TOML document, without consulting the environment
    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }
}

fn environment() -> Environment {
    Environment::with_prefix("SKILL_MATCH")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
