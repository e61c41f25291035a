//! Diagnostic sink contract and an in-memory implementation

use parking_lot::Mutex;
use std::fmt;

/// Where a diagnostic points: a whole class or one of its fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Locus {
    /// A class, by qualified name.
    Class(String),
    /// A field of a class.
    Field { class: String, field: String },
}

impl Locus {
    pub fn class(qualified_name: impl Into<String>) -> Self {
        Locus::Class(qualified_name.into())
    }

    pub fn field(class: impl Into<String>, field: impl Into<String>) -> Self {
        Locus::Field {
            class: class.into(),
            field: field.into(),
        }
    }

    /// Qualified name of the class this locus belongs to.
    pub fn class_name(&self) -> &str {
        match self {
            Locus::Class(class) | Locus::Field { class, .. } => class,
        }
    }
}

impl fmt::Display for Locus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locus::Class(class) => write!(f, "{class}"),
            Locus::Field { class, field } => write!(f, "{class}#{field}"),
        }
    }
}

/// Diagnostic severity, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Note,
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Note => write!(f, "NOTE"),
            Severity::Warning => write!(f, "WARNING"),
            Severity::Error => write!(f, "ERROR"),
        }
    }
}

/// A single recorded diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub locus: Locus,
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.severity, self.locus, self.message)
    }
}

/// Receiver of human-readable diagnostics.
///
/// Fire-and-forget: implementations must not fail and the pipeline never
/// reads anything back from the sink.
pub trait DiagnosticSink {
    fn log(&self, severity: Severity, locus: &Locus, message: &str);

    fn error(&self, locus: &Locus, message: &str) {
        self.log(Severity::Error, locus, message);
    }

    fn warn(&self, locus: &Locus, message: &str) {
        self.log(Severity::Warning, locus, message);
    }

    fn note(&self, locus: &Locus, message: &str) {
        self.log(Severity::Note, locus, message);
    }
}

/// Sink that keeps every diagnostic in memory, in arrival order.
#[derive(Debug, Default)]
pub struct CollectingSink {
    entries: Mutex<Vec<Diagnostic>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all diagnostics recorded so far.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.entries.lock().clone()
    }

    /// Diagnostics with the given severity.
    pub fn with_severity(&self, severity: Severity) -> Vec<Diagnostic> {
        self.entries
            .lock()
            .iter()
            .filter(|d| d.severity == severity)
            .cloned()
            .collect()
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.entries
            .lock()
            .iter()
            .filter(|d| d.severity == severity)
            .count()
    }

    pub fn has_errors(&self) -> bool {
        self.count(Severity::Error) > 0
    }

    pub fn clear(&self) {
        self.entries.lock().clear();
    }
}

impl DiagnosticSink for CollectingSink {
    fn log(&self, severity: Severity, locus: &Locus, message: &str) {
        self.entries.lock().push(Diagnostic {
            severity,
            locus: locus.clone(),
            message: message.to_string(),
        });
    }
}
