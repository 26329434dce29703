//! Data models for the encoding checks.
//!
//! Everything here is transient and recomputed per run:
//! - [`ValidatorConfig`] / [`ScannerConfig`]: the tables and roots injected into each traversal
//! - [`FileRecord`]: a visited path plus its raw bytes
//! - [`Classification`] / [`RunSummary`]: per-file scanner verdicts and their running totals

pub mod config;
pub mod record;
pub mod summary;

pub use config::{ScannerConfig, ValidatorConfig};
pub use record::{FileRecord, ReadError};
pub use summary::{Classification, RunSummary};
