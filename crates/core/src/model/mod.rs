pub mod timeline;
pub mod view;

pub use timeline::{Event, Timeline, TimelineConfig, TimelineIssue, Track};
pub use view::{ViewConfig, ViewKind};
