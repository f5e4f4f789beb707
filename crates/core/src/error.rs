use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure reading or writing a mindmap document on disk.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("{}: file not found", path.display())]
    NotFound { path: PathBuf },
    #[error("{}: read failed: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("{}: invalid JSON: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("{}: encoding failed: {source}", path.display())]
    Encode {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("{}: write failed: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
}

/// The document does not have the shape the timeline patch expects.
#[derive(Debug, Error)]
pub enum PatchError {
    #[error("document root is not a JSON object")]
    RootNotObject,
    #[error("document has no `metadata` object")]
    MissingMetadata,
    #[error("`metadata` is not a JSON object")]
    MetadataNotObject,
    #[error("`metadata.views` is not a JSON object")]
    ViewsNotObject,
    #[error("timeline encoding failed: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Document(#[from] DocumentError),
    #[error(transparent)]
    Patch(#[from] PatchError),
}
