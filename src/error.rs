//! Rich diagnostic error types for nice-lattes.
//!
//! Each subsystem defines its own error type with miette `#[diagnostic]` derives,
//! providing error codes, help text, and source chains. Missing data inside a
//! well-formed document is never an error.

use miette::Diagnostic;
use thiserror::Error;

use crate::config::ConfigError;
use crate::document::DocumentError;
use crate::paths::PathError;
use crate::visibility::VisibilityError;

/// Top-level error type.
///
/// Each variant wraps a subsystem-specific error, preserving its diagnostic
/// code and help text through to the user.
#[derive(Debug, Error, Diagnostic)]
pub enum LattesError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Document(#[from] DocumentError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Visibility(#[from] VisibilityError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Paths(#[from] PathError),
}

pub type LattesResult<T> = std::result::Result<T, LattesError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrapped_errors_keep_message_and_code() {
        let err: LattesError = DocumentError::Malformed {
            message: "unexpected end of stream".into(),
        }
        .into();
        assert!(err.to_string().contains("unexpected end of stream"));
        let code = err.code().map(|c| c.to_string());
        assert_eq!(code.as_deref(), Some("lattes::document::malformed"));
    }
}
