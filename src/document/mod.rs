//! Curriculum document ingestion.
//!
//! Reads the Lattes XML export whole, repairs its legacy encoding, and
//! parses it into an owned [`Element`] tree that extractors navigate by name.
//! The tree is immutable once built and is rebuilt on every request.

pub mod error;
pub mod loader;
pub mod tree;

pub use error::{DocumentError, DocumentResult};
pub use loader::{load_document, normalize_encoding, parse_bytes, parse_text};
pub use tree::Element;
