use std::path::Path;

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::error::DocumentError;
use crate::model::{Timeline, ViewConfig, ViewKind};

/// A mindmap document held as raw JSON.
///
/// Only the keys the timeline patch touches are interpreted; everything else
/// is carried through untouched, in its original key order.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    root: Value,
}

impl Document {
    pub fn new(root: Value) -> Self {
        Self { root }
    }

    /// Parse a document from UTF-8 JSON bytes.
    pub fn from_slice(data: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(data).map(Self::new)
    }

    /// Read and parse the document at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DocumentError> {
        let path = path.as_ref();
        let data = std::fs::read(path).map_err(|source| match source.kind() {
            std::io::ErrorKind::NotFound => DocumentError::NotFound {
                path: path.to_path_buf(),
            },
            _ => DocumentError::Read {
                path: path.to_path_buf(),
                source,
            },
        })?;
        debug!(path = %path.display(), bytes = data.len(), "loaded document");

        Self::from_slice(&data).map_err(|source| DocumentError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Serialize with 2-space indentation. Non-ASCII text is written as is,
    /// without `\u` escapes, and there is no trailing newline.
    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.root)
    }

    /// Overwrite the file at `path` with this document.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), DocumentError> {
        let path = path.as_ref();
        let text = self.to_json_string().map_err(|source| DocumentError::Encode {
            path: path.to_path_buf(),
            source,
        })?;
        std::fs::write(path, text.as_bytes()).map_err(|source| DocumentError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), bytes = text.len(), "saved document");
        Ok(())
    }

    pub fn value(&self) -> &Value {
        &self.root
    }

    pub(crate) fn value_mut(&mut self) -> &mut Value {
        &mut self.root
    }

    pub fn into_value(self) -> Value {
        self.root
    }

    /// Flags stored for one view, if present and well-formed.
    pub fn view(&self, kind: ViewKind) -> Option<ViewConfig> {
        let pointer = format!("/metadata/views/{}", kind.as_str());
        self.root
            .pointer(&pointer)
            .and_then(|v| ViewConfig::deserialize(v).ok())
    }

    /// The typed `timeline` object, or `None` when the document has none.
    pub fn timeline(&self) -> Result<Option<Timeline>, serde_json::Error> {
        self.root
            .get("timeline")
            .map(Timeline::deserialize)
            .transpose()
    }
}
