use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use timeline_patch_core::{Report, SaveMode, Summary, patch_file, payload};
use tracing::warn;
use tracing_subscriber::EnvFilter;

/// Add the responsible-AI timeline to a mindmap document, in place.
#[derive(Debug, Parser)]
#[command(name = "timeline-patch", version)]
struct Cli {
    /// Mindmap JSON document to patch
    #[arg(default_value = payload::DEFAULT_DOCUMENT_PATH)]
    path: PathBuf,

    /// Apply the timeline and print the report without writing the file
    #[arg(long)]
    dry_run: bool,
}

impl Cli {
    fn save_mode(&self) -> SaveMode {
        if self.dry_run {
            SaveMode::DryRun
        } else {
            SaveMode::Overwrite
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mode = cli.save_mode();

    let timeline = payload::ia_responsable();
    for issue in timeline.check() {
        warn!(%issue, "timeline payload is inconsistent");
    }

    let doc = patch_file(&cli.path, &timeline, mode)
        .with_context(|| format!("failed to add timeline to {}", cli.path.display()))?;
    let stored = doc
        .timeline()
        .context("patched timeline does not decode")?
        .context("patched document has no timeline")?;

    print_report(&Report::new(&cli.path, Summary::of(&stored), mode));
    Ok(())
}

#[allow(clippy::print_stdout)]
fn print_report(report: &Report) {
    println!("{report}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_bundled_document_and_overwrite() {
        let cli = Cli::try_parse_from(["timeline-patch"]).unwrap();
        assert_eq!(cli.path, PathBuf::from(payload::DEFAULT_DOCUMENT_PATH));
        assert_eq!(cli.save_mode(), SaveMode::Overwrite);
    }

    #[test]
    fn dry_run_with_explicit_path() {
        let cli = Cli::try_parse_from(["timeline-patch", "--dry-run", "doc.json"]).unwrap();
        assert_eq!(cli.path, PathBuf::from("doc.json"));
        assert_eq!(cli.save_mode(), SaveMode::DryRun);
    }

    #[test]
    fn rejects_unknown_flags() {
        assert!(Cli::try_parse_from(["timeline-patch", "--force"]).is_err());
    }
}
