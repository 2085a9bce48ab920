//! Batch driver: feeds replay files one at a time into an aggregator.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{info, warn};

use crate::aggregate::{IngestOutcome, ReplayAggregator};
use crate::extract::Extractor;

/// Per-outcome counts of one batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    pub attempted: usize,
    pub processed: usize,
    /// Excluded by the team-mode player-count rule.
    pub skipped: usize,
    /// Owner missing from the roster (solo mode).
    pub not_found: usize,
    /// Unreadable files or files without both JSON documents.
    pub failed: usize,
}

impl BatchReport {
    /// Whether at least one battle was processed.
    pub fn succeeded(&self) -> bool {
        self.processed > 0
    }

    fn record(&mut self, outcome: IngestOutcome) {
        match outcome {
            IngestOutcome::Accepted => self.processed += 1,
            IngestOutcome::Skipped => self.skipped += 1,
            IngestOutcome::OwnerNotFound => self.not_found += 1,
        }
    }
}

/// Extract and ingest every file in `paths`, in sorted path order.
///
/// Per-file failures are logged and counted; they never abort the batch.
pub fn process_files<A, P>(aggregator: &mut A, extractor: &Extractor, paths: &[P]) -> BatchReport
where
    A: ReplayAggregator,
    P: AsRef<Path>,
{
    let mut sorted: Vec<PathBuf> = paths.iter().map(|p| p.as_ref().to_path_buf()).collect();
    sorted.sort();

    let mut report = BatchReport::default();
    info!("Analyzing {} replay files", sorted.len());

    for path in &sorted {
        report.attempted += 1;
        let source = source_name(path);
        info!("Processing {}", source);

        match extractor.extract_file(path) {
            Ok(replay) => report.record(aggregator.ingest(&source, &replay)),
            Err(e) => {
                warn!("{}, skipping", e);
                report.failed += 1;
            }
        }
    }

    info!(
        "Processed {}/{} files ({} skipped, {} without owner, {} failed)",
        report.processed, report.attempted, report.skipped, report.not_found, report.failed
    );
    report
}

fn source_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
