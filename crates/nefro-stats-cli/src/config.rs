//! Configuration file handling.
//!
//! Settings come from an optional `nefro-stats.toml`; command-line flags
//! override anything the file sets.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::cli::{Args, OutputFormat};

/// Default config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "nefro-stats.toml";

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Export settings.
    #[serde(default)]
    pub export: ExportConfig,

    /// Monthly series settings.
    #[serde(default)]
    pub monthly: MonthlyConfig,
}

/// Export settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ExportConfig {
    /// Output format.
    #[serde(default)]
    pub format: OutputFormat,

    /// Output file; stdout when unset.
    #[serde(default)]
    pub output: Option<PathBuf>,

    /// System identifier recorded in the export metadata.
    #[serde(default)]
    pub system_id: Option<String>,
}

/// Monthly aggregation settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MonthlyConfig {
    /// Keep only this many recent months.
    #[serde(default)]
    pub max_months: Option<usize>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Try to load configuration from the default location.
    ///
    /// Returns `Ok(None)` if the file doesn't exist, `Err` if it exists but can't be parsed.
    pub fn load_default() -> Result<Option<Self>> {
        let default_path = Path::new(DEFAULT_CONFIG_FILE);

        if default_path.exists() {
            Ok(Some(Self::load(default_path)?))
        } else {
            Ok(None)
        }
    }

    /// Resolve the configuration for a run: explicit `--config`, else the
    /// default file, else built-in defaults.
    pub fn resolve(args: &Args) -> Result<Self> {
        let mut config = match &args.config {
            Some(path) => Self::load(path)?,
            None => Self::load_default()?.unwrap_or_default(),
        };
        config.merge_with_args(args);
        Ok(config)
    }

    /// Merge with CLI arguments. Only flags that were given override the file.
    pub fn merge_with_args(&mut self, args: &Args) {
        if let Some(format) = args.format {
            self.export.format = format;
        }
        if let Some(output) = &args.output {
            self.export.output = Some(output.clone());
        }
        if let Some(system_id) = &args.system_id {
            self.export.system_id = Some(system_id.clone());
        }
        if let Some(max_months) = args.max_months {
            self.monthly.max_months = Some(max_months);
        }
    }
}
