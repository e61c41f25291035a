//! `connmodel check` and `connmodel inspect`

use crate::settings::Settings;
use crate::source;
use anyhow::{Context, Result};
use connmodel_core::{ClassMeta, Processor, RunSummary};
use connmodel_logging::TracingSink;
use std::path::PathBuf;

/// Validate every marked class without writing sources.
pub fn run(settings: &Settings, inputs: &[PathBuf]) -> Result<()> {
    let (metas, summary) = analyze(settings, inputs)?;

    for meta in &metas {
        println!(
            "✓ {} -> {} ({} field(s))",
            meta.qualified_name(),
            meta.generated_qualified_name(),
            meta.fields.len()
        );
    }
    ensure_success(&summary)
}

/// Print derived metadata for every valid marked class as a JSON array.
pub fn inspect(settings: &Settings, inputs: &[PathBuf], class: Option<&str>) -> Result<()> {
    let (metas, summary) = analyze(settings, inputs)?;

    let selected: Vec<&ClassMeta> = metas
        .iter()
        .filter(|meta| {
            class.is_none_or(|name| meta.class_name == name || meta.qualified_name() == name)
        })
        .collect();
    if let Some(name) = class
        && selected.is_empty()
        && summary.is_success()
    {
        anyhow::bail!("No marked class named '{name}'");
    }

    let json = serde_json::to_string_pretty(&selected).context("Failed to serialize metadata")?;
    println!("{json}");
    ensure_success(&summary)
}

fn analyze(settings: &Settings, inputs: &[PathBuf]) -> Result<(Vec<ClassMeta>, RunSummary)> {
    let set = source::load_all(inputs)?;
    let sink = TracingSink::new();
    Ok(Processor::new(&settings.types, &sink).check(&set.classes))
}

fn ensure_success(summary: &RunSummary) -> Result<()> {
    if !summary.is_success() {
        anyhow::bail!(
            "{} class(es) failed validation: {}",
            summary.failed.len(),
            summary.failed.join(", ")
        );
    }
    Ok(())
}
