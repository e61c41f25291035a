//! Reporting policies for recoverable field-level problems

use crate::diagnostics::{DiagnosticSink, Locus};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a detected problem is surfaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReportingPolicy {
    /// Proceed silently.
    #[serde(alias = "ignore")]
    Ignore,
    /// Log a warning and proceed.
    #[default]
    #[serde(alias = "warning", alias = "warn", alias = "WARN")]
    Warning,
    /// Abort the current class.
    #[serde(alias = "error")]
    Error,
}

impl fmt::Display for ReportingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportingPolicy::Ignore => write!(f, "IGNORE"),
            ReportingPolicy::Warning => write!(f, "WARNING"),
            ReportingPolicy::Error => write!(f, "ERROR"),
        }
    }
}

impl FromStr for ReportingPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "IGNORE" => Ok(ReportingPolicy::Ignore),
            "WARNING" | "WARN" => Ok(ReportingPolicy::Warning),
            "ERROR" => Ok(ReportingPolicy::Error),
            other => Err(format!(
                "unknown reporting policy '{other}', expected IGNORE, WARNING or ERROR"
            )),
        }
    }
}

/// What the caller of [`report`] must do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Proceed,
    Abort,
}

impl Outcome {
    pub fn should_abort(self) -> bool {
        self == Outcome::Abort
    }
}

/// Apply `policy` to a detected problem.
///
/// `Warning` logs through the sink. `Error` logs nothing: the caller raises
/// the corresponding [`crate::CodegenError`] and the processor reports it once.
pub fn report(
    sink: &dyn DiagnosticSink,
    policy: ReportingPolicy,
    locus: &Locus,
    message: &str,
) -> Outcome {
    match policy {
        ReportingPolicy::Ignore => Outcome::Proceed,
        ReportingPolicy::Warning => {
            sink.warn(locus, message);
            Outcome::Proceed
        }
        ReportingPolicy::Error => Outcome::Abort,
    }
}
