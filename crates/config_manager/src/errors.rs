//! Configuration system error types.
//!
//! Domain-specific errors for document loading, name resolution and the
//! resolution cascade. Every variant is fatal for a run: a monitoring
//! configuration that cannot be fully resolved never produces rules.

use std::fmt;
use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// The kind of entity a name reference points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferenceKind {
    /// A test template.
    Test,
    /// A class.
    Class,
}

impl fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Test => write!(f, "test"),
            Self::Class => write!(f, "class"),
        }
    }
}

/// Configuration system errors.
///
/// These errors occur when loading or parsing monitoring documents, or when
/// the resolution cascade finds a reference or required value it cannot
/// satisfy.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    #[error("Failed to access configuration file: {path} - {reason}")]
    FileAccessError { path: String, reason: String },

    #[error("Failed to parse configuration file: {path} - {reason}")]
    ParseError { path: String, reason: String },

    #[error("Cannot find referenced {kind} '{name}' (referenced by {referenced_by})")]
    UnresolvedReference {
        kind: ReferenceKind,
        name: String,
        referenced_by: String,
    },

    #[error("Required field '{field}' is empty in {entity}")]
    RequiredFieldMissing { entity: String, field: String },

    #[error("Class inheritance cycle detected at '{class}': {}", chain.join(" -> "))]
    InheritanceCycle { class: String, chain: Vec<String> },

    #[error("Class inheritance chain for '{class}' exceeds the maximum depth of {depth}")]
    InheritanceTooDeep { class: String, depth: usize },
}

/// Result type alias for configuration operations.
pub type ConfigurationResult<T> = Result<T, ConfigurationError>;
