//! Services module - the two encoding checks and the walk they share.
//!
//! The services have no dependency on the binaries or on how results are
//! printed. Each check takes its configuration explicitly and returns an
//! owned report; nothing is accumulated in globals.
//!
//! # Components
//!
//! - [`walk`]: depth-first traversal with a pruning policy, yielding files and per-entry errors
//! - [`validator`]: decode/re-encode length check over an extension allow-list
//! - [`scanner`]: known-bad / known-good substring search with a [`RunSummary`](crate::models::RunSummary)
//!
//! # Usage Example
//!
//! ```ignore
//! use utf8_guard::config;
//! use utf8_guard::services::scan;
//!
//! let report = scan(&config::scanner_config(None)?);
//! println!("{} problems", report.summary.problems);
//! ```

pub mod scanner;
pub mod validator;
pub mod walk;

pub use scanner::{FileOutcome, ScanReport, classify, find_matches, scan};
pub use validator::{Finding, ValidationReport, Verdict, check_record, round_trip_matches, validate};
pub use walk::{Walk, WalkError, WalkEvent, WalkOptions, visit};
