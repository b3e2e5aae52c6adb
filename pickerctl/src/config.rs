//! CLI configuration.
//!
//! Settings are read from `.pickerctl.toml` in the working directory, or
//! from the path given with `--config`. Every field is optional.
//!
//! # Configuration File Format
//!
//! ```toml
//! format = "toml"
//! color = false
//! ```

use std::path::Path;

use anyhow::Context;
use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Default configuration file name.
pub const DEFAULT_CONFIG_FILE: &str = ".pickerctl.toml";

/// Root CLI configuration.
// `Serialize` feeds the per-field defaults into the generated schema.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(default)]
pub struct CliConfig {
    /// Output format for `dump` and `defaults`.
    pub format: OutputFormat,
    /// Whether to colorize terminal output.
    pub color: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Json,
            color: true,
        }
    }
}

/// Serialization format for exported documents.
#[derive(ValueEnum, Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Pretty-printed JSON.
    Json,
    /// TOML with quoted dotted keys.
    Toml,
}

impl CliConfig {
    /// JSON Schema of the configuration file, for editor completion.
    pub fn json_schema() -> anyhow::Result<serde_json::Value> {
        Ok(serde_json::to_value(schemars::schema_for!(CliConfig))?)
    }

    /// Load the configuration.
    ///
    /// An explicit path must exist. Without one, [`DEFAULT_CONFIG_FILE`] is
    /// read from `workdir` when present and defaults are used otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(explicit: Option<&Path>, workdir: &Path) -> anyhow::Result<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let path = workdir.join(DEFAULT_CONFIG_FILE);
                if !path.exists() {
                    debug!("no {} in {}, using defaults", DEFAULT_CONFIG_FILE, workdir.display());
                    return Ok(Self::default());
                }
                path
            }
        };

        info!("loading config {}", path.display());
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: CliConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(config)
    }

    /// Apply command-line overrides on top of the file settings.
    pub fn with_overrides(mut self, format: Option<OutputFormat>, no_color: bool) -> Self {
        if let Some(format) = format {
            self.format = format;
        }
        if no_color {
            self.color = false;
        }
        self
    }
}
