//! Class descriptor document loading

use anyhow::{Context, Result};
use connmodel_core::DescriptorSet;
use std::path::Path;

/// Load and merge several descriptor documents.
///
/// Enum names from every document apply to fields in every other.
pub fn load_all(paths: &[impl AsRef<Path>]) -> Result<DescriptorSet> {
    let mut set = DescriptorSet::new();
    for path in paths {
        set.merge(load(path.as_ref())?);
    }
    Ok(set)
}

/// Load one document, picking the format from the file extension
pub fn load(path: &Path) -> Result<DescriptorSet> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read descriptors: {}", path.display()))?;

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default();
    match extension {
        "toml" => parse_toml(&content),
        "json" => DescriptorSet::from_json(content.as_bytes()).map_err(anyhow::Error::from),
        other => anyhow::bail!(
            "Unsupported descriptor format '{other}' for {} (expected .toml or .json)",
            path.display()
        ),
    }
    .with_context(|| format!("Failed to parse descriptors: {}", path.display()))
}

fn parse_toml(content: &str) -> Result<DescriptorSet> {
    let set: DescriptorSet = toml::from_str(content)?;
    Ok(set.resolved())
}
