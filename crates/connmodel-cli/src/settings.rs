//! Run settings: connmodel.toml merged with command line flags

use anyhow::{Context, Result};
use connmodel_core::{GeneratorConfig, SupportedTypes};
use std::path::{Path, PathBuf};
use tracing::level_filters::LevelFilter;

/// Configuration file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "connmodel.toml";

/// Everything a command needs besides its inputs
#[derive(Debug, Clone)]
pub struct Settings {
    pub config: GeneratorConfig,
    pub types: SupportedTypes,
    pub level: LevelFilter,
}

impl Settings {
    /// Load settings.
    ///
    /// An explicit `--config` path must exist; the default file is optional.
    /// `--log-level` overrides `log_level` from the file.
    pub fn load(config_path: Option<&Path>, log_level: Option<&str>) -> Result<Self> {
        let config = match config_path {
            Some(path) => load_config(path)?,
            None => {
                let default = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default.exists() {
                    load_config(&default)?
                } else {
                    GeneratorConfig::default()
                }
            }
        };

        let level_name = log_level.unwrap_or(&config.log_level);
        let level = connmodel_logging::parse_level(level_name).map_err(anyhow::Error::msg)?;
        let types = config
            .supported_types()
            .context("Invalid supported_types configuration")?;

        Ok(Self {
            config,
            types,
            level,
        })
    }
}

/// Parse a connmodel.toml file
pub fn load_config(path: &Path) -> Result<GeneratorConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config: {}", path.display()))?;
    parse_config(&content).with_context(|| format!("Failed to parse config: {}", path.display()))
}

fn parse_config(content: &str) -> Result<GeneratorConfig> {
    Ok(toml::from_str(content)?)
}
