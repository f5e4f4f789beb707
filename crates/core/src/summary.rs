use std::fmt;
use std::path::{Path, PathBuf};

use crate::model::Timeline;
use crate::patch::SaveMode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackCount {
    pub id: String,
    pub name: String,
    pub events: usize,
}

/// Counts and ranges of a timeline, for the end-of-run report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub tracks: usize,
    pub events: usize,
    pub start_date: String,
    pub end_date: String,
    /// One entry per track, in track order.
    pub per_track: Vec<TrackCount>,
    /// First and last year with an event.
    pub years: Option<(i32, i32)>,
}

impl Summary {
    pub fn of(timeline: &Timeline) -> Self {
        let per_track = timeline
            .config
            .tracks
            .iter()
            .map(|track| TrackCount {
                id: track.id.clone(),
                name: track.name.clone(),
                events: timeline.events.iter().filter(|e| e.track == track.id).count(),
            })
            .collect();

        Self {
            tracks: timeline.config.tracks.len(),
            events: timeline.events.len(),
            start_date: timeline.config.start_date.clone(),
            end_date: timeline.config.end_date.clone(),
            per_track,
            years: timeline.years(),
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "📊 Estadísticas:")?;
        writeln!(f, "  - Tracks: {}", self.tracks)?;
        writeln!(f, "  - Eventos: {}", self.events)?;
        write!(f, "  - Período: {} → {}", self.start_date, self.end_date)?;
        for track in &self.per_track {
            write!(f, "\n    · {}: {}", track.name, track.events)?;
        }
        if let Some((first, last)) = self.years {
            write!(f, "\n  - Años con eventos: {first}–{last}")?;
        }
        Ok(())
    }
}

/// Full report printed after a run.
#[derive(Debug, Clone)]
pub struct Report {
    pub path: PathBuf,
    pub summary: Summary,
    pub mode: SaveMode,
}

impl Report {
    pub fn new(path: &Path, summary: Summary, mode: SaveMode) -> Self {
        Self {
            path: path.to_path_buf(),
            summary,
            mode,
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.mode {
            SaveMode::Overwrite => {
                writeln!(f, "✅ Timeline agregado exitosamente!")?;
                writeln!(f, "📁 Archivo actualizado: {}", self.path.display())?;
            }
            SaveMode::DryRun => {
                writeln!(f, "🔎 Simulación: el archivo no fue modificado")?;
                writeln!(f, "📁 Archivo: {}", self.path.display())?;
            }
        }
        writeln!(f)?;
        write!(f, "{}", self.summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payload;

    #[test]
    fn summarizes_payload() {
        let summary = Summary::of(&payload::ia_responsable());
        assert_eq!(summary.tracks, 3);
        assert_eq!(summary.events, 22);
        assert_eq!(summary.years, Some((2012, 2026)));
        let counts: Vec<usize> = summary.per_track.iter().map(|t| t.events).collect();
        assert_eq!(counts, [10, 7, 5]);
    }

    #[test]
    fn report_format() {
        let summary = Summary::of(&payload::ia_responsable());
        let report = Report::new(Path::new("doc.json"), summary, SaveMode::Overwrite);
        let text = report.to_string();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            &lines[..7],
            [
                "✅ Timeline agregado exitosamente!",
                "📁 Archivo actualizado: doc.json",
                "",
                "📊 Estadísticas:",
                "  - Tracks: 3",
                "  - Eventos: 22",
                "  - Período: 2012-01-01 → 2026-12-31",
            ]
        );
        assert!(text.contains("    · Regulación & Legislación: 10"));
        assert!(text.ends_with("  - Años con eventos: 2012–2026"));
    }

    #[test]
    fn dry_run_report_says_nothing_was_written() {
        let summary = Summary::of(&payload::ia_responsable());
        let report = Report::new(Path::new("doc.json"), summary, SaveMode::DryRun);
        assert!(report.to_string().starts_with("🔎 Simulación"));
    }
}
