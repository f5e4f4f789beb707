//! Adds a fixed, dated timeline to a mindmap JSON document.
//!
//! The document is loaded as raw JSON, `metadata.views` gains `timeline` and
//! `mindmap` entries, the root `timeline` key is replaced, and the result is
//! written back in place with 2-space indentation.

pub mod document;
pub mod error;
pub mod model;
pub mod patch;
pub mod payload;
pub mod summary;

pub use document::Document;
pub use error::{DocumentError, Error, PatchError};
pub use patch::{SaveMode, apply_timeline, patch_file};
pub use summary::{Report, Summary};
