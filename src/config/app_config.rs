//! Layered application configuration
//!
//! # Configuration Format
//!
//! ```toml
//! # sentimeter.toml
//!
//! [server]
//! host = "127.0.0.1"
//! port = 5000
//!
//! [lexicon]
//! path = "/usr/share/sentimeter/vader_lexicon.txt"  # omit to use the bundled lexicon
//!
//! [thresholds]
//! positive_threshold = 0.05
//! negative_threshold = -0.05
//! ```
//!
//! # Environment Variables
//!
//! - `SENTIMETER_HOST`, `SENTIMETER_PORT`
//! - `SENTIMETER_LEXICON`
//! - `SENTIMETER_POSITIVE_THRESHOLD`, `SENTIMETER_NEGATIVE_THRESHOLD`

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::classifier::LabelThresholds;

/// Project-level config file name, looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "sentimeter.toml";

/// Effective configuration after all layers are applied
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub lexicon: LexiconConfig,
    pub thresholds: LabelThresholds,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServerConfig {
    /// Bind address (default: 127.0.0.1)
    pub host: String,
    /// Bind port (default: 5000)
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
        }
    }
}

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LexiconConfig {
    /// Lexicon file; `None` means the bundled copy
    pub path: Option<PathBuf>,
}

/// One config file or env snapshot. Unset fields leave lower layers alone.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigLayer {
    #[serde(default)]
    server: ServerLayer,
    #[serde(default)]
    lexicon: LexiconLayer,
    #[serde(default)]
    thresholds: ThresholdLayer,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ServerLayer {
    host: Option<String>,
    port: Option<u16>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct LexiconLayer {
    path: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ThresholdLayer {
    positive_threshold: Option<f64>,
    negative_threshold: Option<f64>,
}

impl AppConfig {
    /// Load config from all sources, with priority:
    /// 1. Environment variables (highest)
    /// 2. Project config (`<dir>/sentimeter.toml`)
    /// 3. User config (~/.config/sentimeter/config.toml)
    ///
    /// Unreadable or malformed files are skipped with a warning. Invalid
    /// values that survive layering (bad port in env, crossed thresholds)
    /// are errors.
    pub fn load(project_dir: &Path) -> Result<Self> {
        let mut config = AppConfig::default();

        if let Some(user_path) = Self::user_config_path().filter(|p| p.exists()) {
            config.apply_file_lenient(&user_path);
        }

        let project_path = project_dir.join(PROJECT_CONFIG_FILE);
        if project_path.exists() {
            config.apply_file_lenient(&project_path);
        }

        config.apply_env(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Load an explicitly requested config file. Unlike [`AppConfig::load`],
    /// a missing or malformed file is an error.
    pub fn load_file(path: &Path) -> Result<Self> {
        let mut config = AppConfig::default();
        config.apply(read_layer(path)?);
        config.apply_env(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Get the user config file path
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("sentimeter").join("config.toml"))
    }

    fn apply_file_lenient(&mut self, path: &Path) {
        match read_layer(path) {
            Ok(layer) => {
                debug!("Loaded config from {}", path.display());
                self.apply(layer);
            }
            Err(e) => {
                warn!("Failed to load {}: {:#}", path.display(), e);
            }
        }
    }

    /// Merge a layer into this config (layer takes priority)
    fn apply(&mut self, layer: ConfigLayer) {
        if let Some(host) = layer.server.host {
            self.server.host = host;
        }
        if let Some(port) = layer.server.port {
            self.server.port = port;
        }
        if let Some(path) = layer.lexicon.path {
            self.lexicon.path = Some(path);
        }
        if let Some(t) = layer.thresholds.positive_threshold {
            self.thresholds.positive_threshold = t;
        }
        if let Some(t) = layer.thresholds.negative_threshold {
            self.thresholds.negative_threshold = t;
        }
    }

    /// Apply `SENTIMETER_*` overrides read through `lookup`
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("SENTIMETER_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("SENTIMETER_PORT") {
            self.server.port = port
                .trim()
                .parse()
                .with_context(|| format!("Invalid SENTIMETER_PORT value '{}'", port))?;
        }
        if let Some(path) = lookup("SENTIMETER_LEXICON") {
            self.lexicon.path = Some(PathBuf::from(path));
        }
        if let Some(t) = lookup("SENTIMETER_POSITIVE_THRESHOLD") {
            self.thresholds.positive_threshold = t
                .trim()
                .parse()
                .with_context(|| format!("Invalid SENTIMETER_POSITIVE_THRESHOLD value '{}'", t))?;
        }
        if let Some(t) = lookup("SENTIMETER_NEGATIVE_THRESHOLD") {
            self.thresholds.negative_threshold = t
                .trim()
                .parse()
                .with_context(|| format!("Invalid SENTIMETER_NEGATIVE_THRESHOLD value '{}'", t))?;
        }
        Ok(())
    }

    /// Reject configurations the scorer cannot honour
    pub fn validate(&self) -> Result<()> {
        if !self.thresholds.is_valid() {
            anyhow::bail!(
                "Invalid thresholds: positive_threshold ({}) and negative_threshold ({}) \
                 must lie in [-1, 1] with negative <= positive",
                self.thresholds.positive_threshold,
                self.thresholds.negative_threshold
            );
        }
        if self.server.host.trim().is_empty() {
            anyhow::bail!("Server host must not be empty");
        }
        Ok(())
    }

    /// Render the effective config as TOML
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Initialize user config directory and create example config
    pub fn init_user_config() -> Result<PathBuf> {
        let config_path = Self::user_config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        write_example_config(&config_path)?;
        Ok(config_path)
    }
}

/// Write the commented example config to `path` unless something is already there
pub(crate) fn write_example_config(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    if !path.exists() {
        let example = r#"# sentimeter configuration

[server]
# host = "127.0.0.1"
# port = 5000

[lexicon]
# Full VADER lexicon file (token<TAB>valence...). Omit to use the bundled copy.
# path = "/path/to/vader_lexicon.txt"

[thresholds]
# positive_threshold = 0.05
# negative_threshold = -0.05
"#;
        std::fs::write(path, example)
            .with_context(|| format!("Failed to write {}", path.display()))?;
    }
    Ok(())
}

fn read_layer(path: &Path) -> Result<ConfigLayer> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let layer: ConfigLayer =
        toml::from_str(&content).with_context(|| format!("Invalid TOML in {}", path.display()))?;
    Ok(layer)
}
