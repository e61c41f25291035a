//! Per-run processing of discovered classes.
//!
//! The processor is the single place where aborts become ERROR diagnostics:
//! every failed class produces exactly one through the sink, bound to the
//! field or class that caused it.

use crate::builder::MetaBuilder;
use crate::classify::SupportedTypes;
use crate::descriptor::ClassSource;
use crate::diagnostics::{DiagnosticSink, Locus};
use crate::emit::{EmissionBackend, GeneratedUnit};
use crate::error::{CodegenError, CodegenResult};
use crate::meta::ClassMeta;
use crate::synth::synthesize;
use std::collections::HashMap;
use tracing::{debug, info};

/// Outcome of one processing run, by qualified class name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Classes whose artifact was produced (or validated, for a check run)
    pub generated: Vec<String>,
    /// Classes aborted by an error
    pub failed: Vec<String>,
    /// Classes without the model marker
    pub skipped: Vec<String>,
}

impl RunSummary {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn processed(&self) -> usize {
        self.generated.len() + self.failed.len()
    }
}

/// Runs the pipeline over a batch of classes.
pub struct Processor<'a> {
    types: &'a SupportedTypes,
    sink: &'a dyn DiagnosticSink,
}

impl<'a> Processor<'a> {
    pub fn new(types: &'a SupportedTypes, sink: &'a dyn DiagnosticSink) -> Self {
        Self { types, sink }
    }

    /// Build, synthesize and emit one class. Errors are returned, not reported.
    pub fn process_class<C: ClassSource + ?Sized>(
        &self,
        class: &C,
        backend: &mut dyn EmissionBackend,
    ) -> CodegenResult<GeneratedUnit> {
        let meta = MetaBuilder::new(self.types, self.sink).build_class(class)?;
        let unit = synthesize(&meta);
        emit_unit(&unit, backend)?;
        Ok(unit)
    }

    /// Generate every marked class. One class failing never stops the others.
    pub fn run<'c, C, I>(&self, classes: I, backend: &mut dyn EmissionBackend) -> RunSummary
    where
        C: ClassSource + ?Sized + 'c,
        I: IntoIterator<Item = &'c C>,
    {
        let builder = MetaBuilder::new(self.types, self.sink);
        let mut produced = Produced::default();
        let mut summary = RunSummary::default();
        for class in classes {
            let qualified = class.qualified_name();
            if class.model().is_none() {
                debug!(class = %qualified, "Skipping class without model marker");
                summary.skipped.push(qualified);
                continue;
            }

            let result = builder.build_class(class).and_then(|meta| {
                let unit = synthesize(&meta);
                produced.claim(&unit.qualified_name(), &qualified)?;
                emit_unit(&unit, backend)?;
                Ok(unit)
            });
            match result {
                Ok(unit) => {
                    let generated = unit.qualified_name();
                    produced.record(generated.clone(), qualified.clone());
                    info!(class = %qualified, generated = %generated, "Generated builders");
                    self.sink
                        .note(&Locus::class(qualified.as_str()), &format!("generated {generated}"));
                    summary.generated.push(qualified);
                }
                Err(err) => {
                    self.fail(&qualified, &err);
                    summary.failed.push(qualified);
                }
            }
        }
        summary
    }

    /// Build and validate every marked class without emitting anything.
    pub fn check<'c, C, I>(&self, classes: I) -> (Vec<ClassMeta>, RunSummary)
    where
        C: ClassSource + ?Sized + 'c,
        I: IntoIterator<Item = &'c C>,
    {
        let builder = MetaBuilder::new(self.types, self.sink);
        let mut produced = Produced::default();
        let mut metas = Vec::new();
        let mut summary = RunSummary::default();

        for class in classes {
            let qualified = class.qualified_name();
            if class.model().is_none() {
                summary.skipped.push(qualified);
                continue;
            }

            let result = builder.build_class(class).and_then(|meta| {
                produced.claim(&meta.generated_qualified_name(), &qualified)?;
                Ok(meta)
            });
            match result {
                Ok(meta) => {
                    produced.record(meta.generated_qualified_name(), qualified.clone());
                    metas.push(meta);
                    summary.generated.push(qualified);
                }
                Err(err) => {
                    self.fail(&qualified, &err);
                    summary.failed.push(qualified);
                }
            }
        }
        (metas, summary)
    }

    fn fail(&self, class: &str, err: &CodegenError) {
        let locus = err.locus().unwrap_or_else(|| Locus::class(class));
        debug!(class, error = ?err, "Class processing aborted");
        self.sink.error(&locus, &err.to_string());
    }
}

fn emit_unit(unit: &GeneratedUnit, backend: &mut dyn EmissionBackend) -> CodegenResult<()> {
    backend.emit(unit).map_err(|err| CodegenError::Emission {
        class: unit.qualified_name(),
        reason: err.to_string(),
    })
}

/// Generated class names already taken in one run, mapped to their source class.
#[derive(Default)]
struct Produced(HashMap<String, String>);

impl Produced {
    /// A generated class may only be produced once per run.
    fn claim(&self, generated: &str, source: &str) -> CodegenResult<()> {
        match self.0.get(generated) {
            Some(owner) if owner != source => Err(CodegenError::Emission {
                class: generated.to_string(),
                reason: format!("generated class {generated} already produced by {owner}"),
            }),
            _ => Ok(()),
        }
    }

    fn record(&mut self, generated: String, source: String) {
        self.0.insert(generated, source);
    }
}
