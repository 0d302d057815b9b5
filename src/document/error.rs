//! Rich diagnostic error types for document loading.

use miette::Diagnostic;
use thiserror::Error;

/// Fatal failures while turning a curriculum file into a navigable tree.
///
/// Both variants abort the request before any extractor runs. Missing
/// sections or attributes inside a well-formed document are not errors.
#[derive(Debug, Error, Diagnostic)]
pub enum DocumentError {
    #[error("curriculum document unreadable: {path}")]
    #[diagnostic(
        code(lattes::document::unreadable),
        help(
            "The Lattes XML file could not be opened. Check `cv_xml_file` in the \
             configuration and that the file exists and is readable."
        )
    )]
    Unreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("curriculum document malformed: {message}")]
    #[diagnostic(
        code(lattes::document::malformed),
        help(
            "The file is not well-formed XML after encoding repair. Re-export the \
             curriculum from the Lattes platform and replace the file."
        )
    )]
    Malformed { message: String },
}

/// Convenience alias for document operations.
pub type DocumentResult<T> = std::result::Result<T, DocumentError>;
