//! Diagnostic sink that forwards to tracing

use connmodel_core::{DiagnosticSink, Locus, Severity};
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::{error, info, warn};

/// Forwards diagnostics to `tracing` events carrying a `locus` field.
///
/// Errors become `ERROR` events, warnings `WARN` and notes `INFO`. Counts are
/// kept so a host can decide its exit status after a run.
#[derive(Debug, Default)]
pub struct TracingSink {
    errors: AtomicUsize,
    warnings: AtomicUsize,
}

impl TracingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error_count(&self) -> usize {
        self.errors.load(Ordering::Relaxed)
    }

    pub fn warning_count(&self) -> usize {
        self.warnings.load(Ordering::Relaxed)
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }
}

impl DiagnosticSink for TracingSink {
    fn log(&self, severity: Severity, locus: &Locus, message: &str) {
        match severity {
            Severity::Error => {
                self.errors.fetch_add(1, Ordering::Relaxed);
                error!(locus = %locus, "{message}");
            }
            Severity::Warning => {
                self.warnings.fetch_add(1, Ordering::Relaxed);
                warn!(locus = %locus, "{message}");
            }
            Severity::Note => info!(locus = %locus, "{message}"),
        }
    }
}

#[cfg(test)]
#[path = "sink/sink_tests.rs"]
mod sink_tests;
