//! Generator run configuration

use crate::classify::SupportedTypes;
use crate::error::{CodegenError, CodegenResult};
use crate::naming::non_blank;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for one generator run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Supported basic and collection types
    #[serde(default)]
    pub supported_types: SupportedTypesConfig,

    /// Root directory for generated sources
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Initial log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("generated")
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            supported_types: SupportedTypesConfig::default(),
            output_dir: default_output_dir(),
            log_level: default_log_level(),
        }
    }
}

impl GeneratorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create configuration from JSON bytes
    pub fn from_json(bytes: &[u8]) -> CodegenResult<Self> {
        if bytes.is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_slice(bytes)?)
    }

    /// The closed type sets this configuration describes.
    pub fn supported_types(&self) -> CodegenResult<SupportedTypes> {
        self.supported_types.build()
    }
}

/// Additions to (or, with `replace`, a replacement of) the default type sets
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SupportedTypesConfig {
    /// Fully qualified basic type names, primitives by keyword
    #[serde(default)]
    pub basic: Vec<String>,

    /// Fully qualified collection container names
    #[serde(default)]
    pub collections: Vec<String>,

    /// Start from empty sets instead of the defaults
    #[serde(default)]
    pub replace: bool,
}

impl SupportedTypesConfig {
    pub fn build(&self) -> CodegenResult<SupportedTypes> {
        let mut types = if self.replace {
            SupportedTypes::new()
        } else {
            SupportedTypes::default()
        };

        for name in &self.basic {
            types = types.with_basic(checked("basic", name)?);
        }
        for name in &self.collections {
            types = types.with_collection(checked("collections", name)?);
        }
        Ok(types)
    }
}

fn checked<'a>(key: &str, name: &'a str) -> CodegenResult<&'a str> {
    let name = non_blank(name)
        .map(str::trim)
        .ok_or_else(|| CodegenError::Config(format!("supported_types.{key} contains a blank entry")))?;
    if name.chars().any(char::is_whitespace) {
        return Err(CodegenError::Config(format!(
            "supported_types.{key} entry '{name}' contains whitespace"
        )));
    }
    Ok(name)
}

#[cfg(test)]
#[path = "config/config_tests.rs"]
mod config_tests;
