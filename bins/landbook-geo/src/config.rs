//! Configuration file loading
//!
//! Settings come from a TOML file; command-line flags override them.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Root configuration schema
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub bounds: BoundsConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Bounding box padding
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoundsConfig {
    /// Padding used by `bounds --expand` when no factor is given
    #[serde(default = "default_expand_factor")]
    pub expand_factor: f64,

    /// Padding around a parcel for external area queries
    #[serde(default = "default_query_factor")]
    pub query_factor: f64,
}

impl Default for BoundsConfig {
    fn default() -> Self {
        Self {
            expand_factor: default_expand_factor(),
            query_factor: default_query_factor(),
        }
    }
}

fn default_expand_factor() -> f64 {
    landbook_geo::DEFAULT_EXPAND_FACTOR
}

fn default_query_factor() -> f64 {
    0.5
}

/// Output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output format (text, json)
    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
        }
    }
}

fn default_format() -> String {
    "text".to_string()
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Config {
    /// Load configuration from a file path or use defaults
    ///
    /// An explicit path must exist. Without one, the standard locations are
    /// searched and defaults are used if none is found.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => load_config_file(p),
            None => match find_config_file() {
                Some(p) => load_config_file(Path::new(p)),
                None => Ok(Self::default()),
            },
        }
    }
}

/// Find configuration file in standard locations
fn find_config_file() -> Option<&'static str> {
    let candidates = [
        ".landbook-geo.toml",
        "landbook-geo.toml",
        ".config/landbook-geo.toml",
    ];

    candidates.into_iter().find(|c| Path::new(c).exists())
}

/// Load and parse a TOML configuration file
fn load_config_file(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;

    toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file {}", path.display()))
}
