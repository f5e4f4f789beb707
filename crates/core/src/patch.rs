use std::path::Path;

use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::document::Document;
use crate::error::{Error, PatchError};
use crate::model::{Timeline, ViewConfig, ViewKind};

/// Whether [`patch_file`] writes the result back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveMode {
    Overwrite,
    DryRun,
}

/// Enable the timeline and mindmap views and replace `timeline` with the
/// given one.
///
/// Every step is an unconditional assignment, so applying the same timeline
/// again leaves the document unchanged. A document without a `metadata`
/// object is rejected and left as it was.
pub fn apply_timeline(doc: &mut Document, timeline: &Timeline) -> Result<(), PatchError> {
    // Encode up front so a failure cannot leave a half-patched document.
    let timeline_value = serde_json::to_value(timeline)?;
    let mut views_patch = Vec::with_capacity(2);
    for kind in [ViewKind::Timeline, ViewKind::Mindmap] {
        views_patch.push((kind, serde_json::to_value(ViewConfig::for_kind(kind))?));
    }

    let root = doc
        .value_mut()
        .as_object_mut()
        .ok_or(PatchError::RootNotObject)?;

    let metadata = match root.get_mut("metadata") {
        Some(Value::Object(metadata)) => metadata,
        Some(_) => return Err(PatchError::MetadataNotObject),
        None => return Err(PatchError::MissingMetadata),
    };

    if !metadata.contains_key("views") {
        debug!("creating metadata.views");
    }
    let Value::Object(views) = metadata
        .entry("views")
        .or_insert_with(|| Value::Object(Map::new()))
    else {
        return Err(PatchError::ViewsNotObject);
    };
    for (kind, value) in views_patch {
        views.insert(kind.as_str().to_string(), value);
    }

    root.insert("timeline".to_string(), timeline_value);
    Ok(())
}

/// Load the document at `path`, apply `timeline`, and write it back unless
/// `mode` is [`SaveMode::DryRun`]. Returns the patched document.
pub fn patch_file(path: &Path, timeline: &Timeline, mode: SaveMode) -> Result<Document, Error> {
    let mut doc = Document::load(path)?;
    apply_timeline(&mut doc, timeline)?;
    info!(
        path = %path.display(),
        tracks = timeline.config.tracks.len(),
        events = timeline.events.len(),
        "timeline applied"
    );

    match mode {
        SaveMode::Overwrite => doc.save(path)?,
        SaveMode::DryRun => info!(path = %path.display(), "dry run, document not written"),
    }
    Ok(doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Event, TimelineConfig, Track};
    use serde_json::json;

    fn small_timeline() -> Timeline {
        Timeline {
            config: TimelineConfig {
                start_date: "2020-01-01".to_string(),
                end_date: "2020-12-31".to_string(),
                tracks: vec![Track::new("t", "Track", "#111111")],
            },
            events: vec![Event {
                id: "e".to_string(),
                title: "Event".to_string(),
                description: "Unión Europea".to_string(),
                date: "2020-06-01".to_string(),
                track: "t".to_string(),
            }],
        }
    }

    #[test]
    fn creates_views_in_empty_metadata() {
        let mut doc = Document::new(json!({"metadata": {}}));
        apply_timeline(&mut doc, &small_timeline()).unwrap();

        assert_eq!(doc.view(ViewKind::Timeline), Some(ViewConfig::TIMELINE));
        assert_eq!(doc.view(ViewKind::Mindmap), Some(ViewConfig::MINDMAP));
        assert_eq!(doc.value()["metadata"]["views"]["timeline"]["enabled"], json!(true));
        assert_eq!(doc.value()["metadata"]["views"]["mindmap"]["default"], json!(true));
        assert_eq!(doc.timeline().unwrap(), Some(small_timeline()));
    }

    #[test]
    fn keeps_other_views_and_keys() {
        let mut doc = Document::new(json!({
            "projectId": "p1",
            "metadata": {
                "title": "IA",
                "views": {
                    "mindmap": {"enabled": false, "default": false, "file": "m.json"},
                    "presentation": {"enabled": true}
                }
            },
            "mindmap": {"rootNodeId": "root", "nodes": {}}
        }));
        apply_timeline(&mut doc, &small_timeline()).unwrap();

        let views = &doc.value()["metadata"]["views"];
        assert_eq!(views["presentation"], json!({"enabled": true}));
        // The mindmap entry is replaced wholesale.
        assert_eq!(views["mindmap"], json!({"enabled": true, "default": true}));
        assert_eq!(doc.value()["metadata"]["title"], json!("IA"));
        assert_eq!(doc.value()["mindmap"]["rootNodeId"], json!("root"));
    }

    #[test]
    fn replaces_existing_timeline_in_place() {
        let mut doc = Document::new(json!({
            "metadata": {},
            "timeline": {"stale": true},
            "after": 1
        }));
        apply_timeline(&mut doc, &small_timeline()).unwrap();

        let keys: Vec<&String> = doc.value().as_object().unwrap().keys().collect();
        assert_eq!(keys, ["metadata", "timeline", "after"]);
        assert!(doc.value()["timeline"].get("stale").is_none());
    }

    #[test]
    fn second_application_is_byte_identical() {
        let mut doc = Document::new(json!({"metadata": {"title": "x"}, "nodes": [1, 2.5]}));
        apply_timeline(&mut doc, &small_timeline()).unwrap();
        let first = doc.to_json_string().unwrap();
        apply_timeline(&mut doc, &small_timeline()).unwrap();
        assert_eq!(doc.to_json_string().unwrap(), first);
    }

    #[test]
    fn missing_metadata_is_rejected() {
        let mut doc = Document::new(json!({"nodes": {}}));
        let err = apply_timeline(&mut doc, &small_timeline()).unwrap_err();
        assert!(matches!(err, PatchError::MissingMetadata));
        assert_eq!(doc.value(), &json!({"nodes": {}}));
    }

    #[test]
    fn wrong_shapes_are_rejected_untouched() {
        let mut root_array = Document::new(json!([]));
        assert!(matches!(
            apply_timeline(&mut root_array, &small_timeline()),
            Err(PatchError::RootNotObject)
        ));

        let mut metadata_string = Document::new(json!({"metadata": "x"}));
        assert!(matches!(
            apply_timeline(&mut metadata_string, &small_timeline()),
            Err(PatchError::MetadataNotObject)
        ));

        let original = json!({"metadata": {"views": []}});
        let mut views_array = Document::new(original.clone());
        assert!(matches!(
            apply_timeline(&mut views_array, &small_timeline()),
            Err(PatchError::ViewsNotObject)
        ));
        assert_eq!(views_array.value(), &original);
    }
}
