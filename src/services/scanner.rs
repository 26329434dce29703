//! Mojibake scanner behind `test-encoding`.
//!
//! Searches source files for a fixed table of double-encoded strings and for
//! their correctly encoded counterparts, classifying each file and counting
//! the results.

use crate::models::{Classification, FileRecord, RunSummary, ScannerConfig};
use crate::services::walk::{self, WalkEvent, WalkOptions};
use camino::{Utf8Path, Utf8PathBuf};
use std::process::ExitCode;
use std::time::Instant;

/// Per-entry outcome, kept in traversal order for reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    Checked {
        path: Utf8PathBuf,
        classification: Classification,
    },
    ReadFailed {
        path: Utf8PathBuf,
        message: String,
    },
    DirectoryFailed {
        path: String,
        message: String,
    },
}

/// Everything one scan produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanReport {
    pub outcomes: Vec<FileOutcome>,
    pub summary: RunSummary,
}

impl ScanReport {
    pub fn exit_code(&self) -> ExitCode {
        if self.summary.is_clean() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    }
}

/// Every entry of `table` that occurs in `text`, in table order.
pub fn find_matches(text: &str, table: &[String]) -> Vec<String> {
    table
        .iter()
        .filter(|needle| text.contains(needle.as_str()))
        .cloned()
        .collect()
}

/// Known-bad hits take precedence over known-good ones.
pub fn classify(text: &str, known_bad: &[String], known_good: &[String]) -> Classification {
    let bad = find_matches(text, known_bad);
    if !bad.is_empty() {
        return Classification::Problem { found: bad };
    }

    let good = find_matches(text, known_good);
    if !good.is_empty() {
        return Classification::Correct { found: good };
    }

    Classification::Neither
}

/// Walk `config.root`, classify every matching file, and total the results.
pub fn scan(config: &ScannerConfig) -> ScanReport {
    let started = Instant::now();
    let options = WalkOptions {
        skip_hidden_dirs: config.skip_hidden_dirs,
        skip_dirs: config.skip_dirs.clone(),
    };
    tracing::info!("Scanning {} for mojibake", config.root);

    let mut report = ScanReport::default();
    for event in walk::visit(&config.root, &options) {
        let path = match event {
            WalkEvent::File(path) => path,
            WalkEvent::Error(err) => {
                let entry = Utf8Path::new(err.path());
                if !err.is_directory() && walk::has_suffix(entry, &config.extensions) {
                    // A scanned file that could not even be opened, e.g. a dangling symlink
                    tracing::debug!("Cannot read {}: {}", entry, err.message());
                    report.summary.record_unreadable();
                    report.outcomes.push(FileOutcome::ReadFailed {
                        path: entry.to_path_buf(),
                        message: err.message(),
                    });
                } else {
                    tracing::debug!("Skipping subtree {}: {}", entry, err.message());
                    report.outcomes.push(FileOutcome::DirectoryFailed {
                        path: err.path().to_string(),
                        message: err.message(),
                    });
                }
                continue;
            }
        };

        if !walk::has_suffix(&path, &config.extensions) {
            continue;
        }

        let text = FileRecord::read(&path).and_then(FileRecord::into_text);
        match text {
            Ok(text) => {
                let classification = classify(&text, &config.known_bad, &config.known_good);
                tracing::debug!("{} -> {:?}", path, classification);
                report.summary.record(&classification);
                report.outcomes.push(FileOutcome::Checked {
                    path,
                    classification,
                });
            }
            Err(e) => {
                tracing::debug!("Cannot read {}: {}", path, e);
                report.summary.record_unreadable();
                report.outcomes.push(FileOutcome::ReadFailed {
                    path,
                    message: e.to_string(),
                });
            }
        }
    }

    tracing::info!(
        "Scanned {} files in {:.2}s: {} correct, {} problems",
        report.summary.total,
        started.elapsed().as_secs_f64(),
        report.summary.correct,
        report.summary.problems
    );
    report
}
