// thiserror's #[error("...{field}...")] format strings reference struct fields,
// but the compiler doesn't see through the derive macro and reports false positives.
#![allow(unused_assignments)]

//! # nice-lattes
//!
//! Extraction of Lattes curriculum XML exports into typed, sorted records,
//! plus a visibility overlay that decides which of them reach a public page.
//!
//! ## Architecture
//!
//! - **Document** (`document`): whole-file read, ISO-8859-1 repair, owned element tree
//! - **Extraction** (`extract`): one total extractor per category, a generic fallback
//!   for open-ended categories, id synthesis, stable newest-first sorting
//! - **Visibility** (`visibility`): JSON-backed hide-sets for sections and records
//! - **Configuration** (`config`, `paths`): TOML site config with XDG defaults
//!
//! ## Library usage
//!
//! ```no_run
//! use std::path::Path;
//!
//! use nice_lattes::extract::Curriculum;
//! use nice_lattes::visibility::VisibilityStore;
//!
//! let cv = Curriculum::load(Path::new("cv.xml")).unwrap();
//! let visibility = VisibilityStore::new("data/visibility.json").load();
//! for section in cv.public_view(&visibility) {
//!     println!("{} ({} items)", section.label, section.items.len());
//! }
//! ```

pub mod config;
pub mod document;
pub mod error;
pub mod extract;
pub mod paths;
pub mod visibility;
