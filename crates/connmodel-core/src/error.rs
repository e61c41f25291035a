//! Error types for connector model processing

use crate::diagnostics::Locus;
use thiserror::Error;

/// Result type alias for connector model operations
pub type CodegenResult<T> = Result<T, CodegenError>;

/// Error type for connector model operations
///
/// Every variant except [`CodegenError::InvalidType`] and
/// [`CodegenError::Config`] aborts processing of exactly one class.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodegenError {
    /// The expected read accessor is not declared on the class
    #[error("missing getter method for field '{field}', expected getter name: '{expected}'")]
    MissingAccessor {
        class: String,
        field: String,
        expected: String,
    },

    /// The classified element type is outside the supported set
    #[error(
        "unsupported type '{type_name}' for connector attribute '{field}', supported types are: {supported}"
    )]
    UnsupportedType {
        class: String,
        field: String,
        type_name: String,
        supported: String,
    },

    /// The class does not have exactly one uid and exactly one name field
    #[error("{}", invariant_message(*uid_count, *name_count))]
    InvariantViolation {
        class: String,
        uid_count: usize,
        name_count: usize,
    },

    /// The class-level marker was put on something that is not a class
    #[error("connector model marker can only be applied to classes, '{class}' is {kind}")]
    NotAClass { class: String, kind: String },

    /// The emission backend failed to persist the generated artifact
    #[error("failed to generate code for {class}: {reason}")]
    Emission { class: String, reason: String },

    /// A type expression in a descriptor could not be parsed
    #[error("invalid type expression '{input}': {reason}")]
    InvalidType { input: String, reason: String },

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

fn invariant_message(uid_count: usize, name_count: usize) -> String {
    let mut problems = Vec::new();
    if uid_count != 1 {
        problems.push(format!(
            "exactly one uid field is required, found {uid_count}"
        ));
    }
    if name_count != 1 {
        problems.push(format!(
            "exactly one name field is required, found {name_count}"
        ));
    }
    format!("invalid connector model: {}", problems.join("; "))
}

impl CodegenError {
    /// The class or field this error should be reported against.
    ///
    /// `None` for errors that are not bound to a processed class.
    pub fn locus(&self) -> Option<Locus> {
        match self {
            CodegenError::MissingAccessor { class, field, .. }
            | CodegenError::UnsupportedType { class, field, .. } => {
                Some(Locus::field(class.clone(), field.clone()))
            }
            CodegenError::InvariantViolation { class, .. }
            | CodegenError::NotAClass { class, .. }
            | CodegenError::Emission { class, .. } => Some(Locus::class(class.clone())),
            CodegenError::InvalidType { .. } | CodegenError::Config(_) => None,
        }
    }

    /// Whether this error aborts a single class rather than the whole run.
    pub fn is_class_scoped(&self) -> bool {
        self.locus().is_some()
    }
}

impl From<serde_json::Error> for CodegenError {
    fn from(err: serde_json::Error) -> Self {
        CodegenError::Config(err.to_string())
    }
}
