//! Visibility overlay: which sections and records reach the public view.
//!
//! The overlay is a pair of hide-sets persisted as
//! `{"hidden_sections": [...], "hidden_items": [...]}`. Section keys are the
//! [`SectionKey`](crate::extract::SectionKey) strings; item keys are record
//! ids. The source document is never modified.
//!
//! Saving replaces the whole file. Two administrators saving at once race
//! and the last writer wins; there is no merge and no lock.

pub mod config;
pub mod error;
pub mod store;

pub use config::{VisibilityConfig, filter};
pub use error::{VisibilityError, VisibilityResult};
pub use store::VisibilityStore;
