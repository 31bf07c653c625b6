//! Public error types for the Lispy API.
//!
//! Evaluation failures are values (`Value::Error`), so the only error that
//! crosses the API boundary is a source text that does not parse.

use crate::parser::{ParseError, Span};
use core::fmt;
use thiserror::Error;

/// Public error type for all Lispy operations.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// The input could not be parsed.
    #[error("Parse error: {}", .diagnostic.message)]
    Parse {
        diagnostic: Diagnostic,
        input: String,
    },
}

impl Error {
    /// The source text the error refers to.
    pub fn source_text(&self) -> &str {
        match self {
            Error::Parse { input, .. } => input,
        }
    }
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Error::Parse {
            diagnostic: err.to_diagnostic(),
            input: err.source,
        }
    }
}

/// A diagnostic message (error, warning, or info) with source location.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    /// Severity level (error, warning, info).
    pub severity: Severity,

    /// Primary diagnostic message.
    pub message: String,

    /// Source location of the primary issue.
    pub span: Span,

    /// Optional help text suggesting how to fix the issue.
    pub help: Option<String>,

    /// Optional error code (e.g., "P001") for documentation lookup.
    pub code: Option<String>,
}

/// Severity level for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}
