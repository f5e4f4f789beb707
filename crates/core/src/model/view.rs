use serde::{Deserialize, Serialize};

/// A rendering mode the mindmap app can offer for a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Mindmap,
    Timeline,
}

impl ViewKind {
    /// Key of this view under `metadata.views`.
    pub fn as_str(self) -> &'static str {
        match self {
            ViewKind::Mindmap => "mindmap",
            ViewKind::Timeline => "timeline",
        }
    }
}

/// Per-view flags stored under `metadata.views.<name>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewConfig {
    pub enabled: bool,
    /// Whether the app opens the document in this view.
    pub default: bool,
}

impl ViewConfig {
    pub const TIMELINE: Self = Self {
        enabled: true,
        default: false,
    };

    pub const MINDMAP: Self = Self {
        enabled: true,
        default: true,
    };

    /// Flags the patch assigns to the given view.
    pub fn for_kind(kind: ViewKind) -> Self {
        match kind {
            ViewKind::Mindmap => Self::MINDMAP,
            ViewKind::Timeline => Self::TIMELINE,
        }
    }
}
