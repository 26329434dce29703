//! Round-trip validator behind `check-utf8`.
//!
//! Every file whose extension is allowed is decoded as UTF-8 with lossy
//! replacement and re-encoded. A length change proves invalid sequences were
//! replaced, so the file was not clean UTF-8. The converse does not hold.
//!
//! Known blind spots of the length heuristic:
//! - Mojibake that was itself saved as valid UTF-8 (for example `RÃ´le`)
//!   re-encodes to the same length and passes; the scanner's string tables
//!   cover those cases.
//! - A truncated 4-byte sequence whose first three bytes survive
//!   (`F0 9F 98` before ASCII) collapses into one U+FFFD, which is also three
//!   bytes long, so the file passes.

use crate::models::{FileRecord, ValidatorConfig};
use crate::services::walk::{self, WalkEvent, WalkOptions};
use camino::Utf8PathBuf;
use std::process::ExitCode;
use std::time::Instant;

/// Result of checking one file's bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Match,
    Mismatch,
}

/// Something that fails the validation run, in traversal order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Finding {
    /// Round-trip length differs from the original.
    Mismatch(Utf8PathBuf),
    /// The entry could not be read at all.
    Unreadable { path: String, message: String },
}

/// Accumulated outcome of one validator run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// Files whose bytes were compared.
    pub checked: usize,
    pub findings: Vec<Finding>,
}

impl ValidationReport {
    pub fn failed(&self) -> bool {
        !self.findings.is_empty()
    }

    pub fn mismatches(&self) -> impl Iterator<Item = &Utf8PathBuf> {
        self.findings.iter().filter_map(|finding| match finding {
            Finding::Mismatch(path) => Some(path),
            Finding::Unreadable { .. } => None,
        })
    }

    pub fn exit_code(&self) -> ExitCode {
        if self.failed() {
            ExitCode::FAILURE
        } else {
            ExitCode::SUCCESS
        }
    }
}

/// Decode with replacement, re-encode, compare byte lengths.
pub fn round_trip_matches(bytes: &[u8]) -> bool {
    String::from_utf8_lossy(bytes).len() == bytes.len()
}

pub fn check_record(record: &FileRecord) -> Verdict {
    if round_trip_matches(&record.bytes) {
        Verdict::Match
    } else {
        Verdict::Mismatch
    }
}

/// Walk `config.root` and round-trip every allowed file.
///
/// Unreadable files and directories do not stop the walk; they are recorded
/// as [`Finding::Unreadable`] and fail the run.
pub fn validate(config: &ValidatorConfig) -> ValidationReport {
    let started = Instant::now();
    let options = WalkOptions {
        skip_hidden_dirs: false,
        skip_dirs: config.skip_dirs.clone(),
    };
    tracing::info!("Validating UTF-8 round-trip under {}", config.root);

    let mut report = ValidationReport::default();
    for event in walk::visit(&config.root, &options) {
        let path = match event {
            WalkEvent::File(path) => path,
            WalkEvent::Error(err) => {
                tracing::debug!("Cannot traverse {}: {}", err.path(), err.message());
                report.findings.push(Finding::Unreadable {
                    path: err.path().to_string(),
                    message: err.message(),
                });
                continue;
            }
        };

        if !walk::has_extension(&path, &config.extensions) {
            continue;
        }

        match FileRecord::read(&path) {
            Ok(record) => {
                report.checked += 1;
                if check_record(&record) == Verdict::Mismatch {
                    tracing::debug!("Round-trip mismatch: {}", record.path);
                    report.findings.push(Finding::Mismatch(record.path));
                }
            }
            Err(e) => {
                tracing::debug!("Cannot read {}: {}", path, e);
                report.findings.push(Finding::Unreadable {
                    path: path.to_string(),
                    message: e.to_string(),
                });
            }
        }
    }

    tracing::info!(
        "Validated {} files in {:.2}s, {} findings",
        report.checked,
        started.elapsed().as_secs_f64(),
        report.findings.len()
    );
    report
}
