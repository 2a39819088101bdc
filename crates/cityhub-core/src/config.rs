//! Configuration types for cityhub.
//!
//! [`Config::load`] layers, lowest priority first: the embedded defaults, an
//! optional TOML file, then `CITYHUB__SECTION__KEY` environment variables.
//! [`Config::defaults`] returns the embedded defaults without touching the
//! filesystem or the environment (useful in tests).

use serde::Deserialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 5000

[data]
dir = "data"

[limits]
featured_schemes = 5
search_results   = 10
"#;

const ENV_PREFIX: &str = "CITYHUB";

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub limits: LimitsConfig,
}

/// `[server]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 5000 }

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// `[data]` section: where the JSON resources live.
#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_data_dir")]
    pub dir: PathBuf,
}

fn default_data_dir() -> PathBuf { PathBuf::from("data") }

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dir: default_data_dir(),
        }
    }
}

/// `[limits]` section: result caps applied by the route layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct LimitsConfig {
    /// Schemes shown on a city dashboard.
    #[serde(default = "default_featured_schemes")]
    pub featured_schemes: usize,
    /// Hits returned by the search API.
    #[serde(default = "default_search_results")]
    pub search_results: usize,
}

fn default_featured_schemes() -> usize { 5 }
fn default_search_results() -> usize { 10 }

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            featured_schemes: default_featured_schemes(),
            search_results: default_search_results(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load the embedded defaults, overlaid by `path` (if given) and then by
    /// the environment. A `path` that does not exist is an error.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let mut builder = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml));

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path).required(true));
        }

        builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        Self {
            server: ServerConfig::default(),
            data: DataConfig::default(),
            limits: LimitsConfig::default(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
