//! Error types for the visibility overlay.

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Errors from persisting the visibility file.
///
/// Reads never fail: an absent or corrupt file loads as "show everything".
#[derive(Debug, Error, Diagnostic)]
pub enum VisibilityError {
    #[error("failed to save visibility file {}: {message}", path.display())]
    #[diagnostic(
        code(lattes::visibility::persistence),
        help(
            "The visibility settings were not written. Check that the directory \
             exists and is writable by this process; the previous file is unchanged."
        )
    )]
    Persistence { path: PathBuf, message: String },
}

pub type VisibilityResult<T> = std::result::Result<T, VisibilityError>;
