//! `connmodel generate`

use crate::settings::Settings;
use crate::source;
use anyhow::Result;
use connmodel_core::{JavaFileBackend, Processor};
use connmodel_logging::TracingSink;
use std::path::PathBuf;

/// Generate builder sources for every marked class in `inputs`.
///
/// Fails after the whole batch has run if any class failed.
pub fn run(settings: &Settings, inputs: &[PathBuf], output: Option<PathBuf>) -> Result<()> {
    let set = source::load_all(inputs)?;
    let output = output.unwrap_or_else(|| settings.config.output_dir.clone());

    let sink = TracingSink::new();
    let mut backend = JavaFileBackend::new(&output);
    let summary = Processor::new(&settings.types, &sink).run(&set.classes, &mut backend);

    for path in backend.written() {
        println!("  {}", path.display());
    }
    println!(
        "Generated {} class(es) into {}",
        summary.generated.len(),
        output.display()
    );

    if !summary.is_success() {
        anyhow::bail!(
            "{} class(es) failed: {}",
            summary.failed.len(),
            summary.failed.join(", ")
        );
    }
    Ok(())
}
