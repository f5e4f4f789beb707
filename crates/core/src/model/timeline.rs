use std::collections::HashSet;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Dates are stored as plain ISO calendar dates.
const DATE_FORMAT: &str = "%Y-%m-%d";

fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, DATE_FORMAT).ok()
}

/// A labeled, colored lane that groups events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    pub id: String,
    pub name: String,
    /// Hex color, e.g. `#EF4444`.
    pub color: String,
}

impl Track {
    pub fn new(id: impl Into<String>, name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color: color.into(),
        }
    }
}

/// A single dated item on one track.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub description: String,
    /// ISO date (`YYYY-MM-DD`).
    pub date: String,
    /// Id of the owning [`Track`].
    pub track: String,
}

impl Event {
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        parse_date(&self.date)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineConfig {
    pub start_date: String,
    pub end_date: String,
    pub tracks: Vec<Track>,
}

impl TimelineConfig {
    /// Configured range as parsed dates, if both ends are valid.
    pub fn range(&self) -> Option<(NaiveDate, NaiveDate)> {
        Some((parse_date(&self.start_date)?, parse_date(&self.end_date)?))
    }
}

/// The `timeline` object of a mindmap document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    pub config: TimelineConfig,
    pub events: Vec<Event>,
}

/// A broken timeline invariant, as reported by [`Timeline::check`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimelineIssue {
    #[error("event {event} references unknown track {track}")]
    UnknownTrack { event: String, track: String },
    #[error("event {event} date {date} is outside the configured range")]
    OutOfRange { event: String, date: String },
    #[error("{owner} has invalid date {date:?}")]
    InvalidDate { owner: String, date: String },
    #[error("duplicate track id {0}")]
    DuplicateTrack(String),
    #[error("duplicate event id {0}")]
    DuplicateEvent(String),
}

impl Timeline {
    pub fn track(&self, id: &str) -> Option<&Track> {
        self.config.tracks.iter().find(|t| t.id == id)
    }

    /// Events on one track, in chronological order.
    pub fn events_on(&self, track_id: &str) -> Vec<&Event> {
        let mut events: Vec<&Event> = self.events.iter().filter(|e| e.track == track_id).collect();
        // ISO dates sort lexically; the sort is stable for equal dates.
        events.sort_by(|a, b| a.date.cmp(&b.date));
        events
    }

    /// First and last year that carries an event.
    pub fn years(&self) -> Option<(i32, i32)> {
        let mut years = self
            .events
            .iter()
            .filter_map(Event::parsed_date)
            .map(|d| d.year());
        let first = years.next()?;
        Some(years.fold((first, first), |(lo, hi), y| (lo.min(y), hi.max(y))))
    }

    /// Collect every broken invariant. An empty list means the timeline is
    /// consistent: unique ids, known track references, dates in range.
    pub fn check(&self) -> Vec<TimelineIssue> {
        let mut issues = Vec::new();

        let mut track_ids = HashSet::new();
        for track in &self.config.tracks {
            if !track_ids.insert(track.id.as_str()) {
                issues.push(TimelineIssue::DuplicateTrack(track.id.clone()));
            }
        }

        let range = self.config.range();
        if range.is_none() {
            for (owner, date) in [
                ("config.startDate", &self.config.start_date),
                ("config.endDate", &self.config.end_date),
            ] {
                if parse_date(date).is_none() {
                    issues.push(TimelineIssue::InvalidDate {
                        owner: owner.to_string(),
                        date: date.clone(),
                    });
                }
            }
        }

        let mut event_ids = HashSet::new();
        for event in &self.events {
            if !event_ids.insert(event.id.as_str()) {
                issues.push(TimelineIssue::DuplicateEvent(event.id.clone()));
            }
            if !track_ids.contains(event.track.as_str()) {
                issues.push(TimelineIssue::UnknownTrack {
                    event: event.id.clone(),
                    track: event.track.clone(),
                });
            }
            match (event.parsed_date(), range) {
                (None, _) => issues.push(TimelineIssue::InvalidDate {
                    owner: format!("event {}", event.id),
                    date: event.date.clone(),
                }),
                (Some(date), Some((start, end))) if date < start || date > end => {
                    issues.push(TimelineIssue::OutOfRange {
                        event: event.id.clone(),
                        date: event.date.clone(),
                    });
                }
                _ => {}
            }
        }

        issues
    }
}
