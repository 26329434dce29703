// utf8-guard - UTF-8 encoding gates for CI
//
// Library crate with the traversal, both checks, and their reporting.
// The binaries (src/bin/) are thin wrappers that parse flags and set the exit code.

pub mod cli;
pub mod config;
pub mod logging;
pub mod models;
pub mod report;
pub mod services;

// Re-export commonly used types for convenience
pub use models::{Classification, FileRecord, RunSummary, ScannerConfig, ValidatorConfig};
pub use services::{ScanReport, ValidationReport, scan, validate};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
