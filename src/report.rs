//! Human-readable rendering of validator and scanner results.
//!
//! These are the lines CI logs show. Diagnostic logging goes through
//! `tracing` separately and is off at the default level.

use crate::models::{Classification, RunSummary};
use crate::services::{FileOutcome, Finding, ScanReport, ValidationReport};
use std::io::{self, Write};

/// One `[ENCODING]` line per finding. Passing files produce nothing.
pub fn write_validation<W: Write>(report: &ValidationReport, out: &mut W) -> io::Result<()> {
    for finding in &report.findings {
        match finding {
            Finding::Mismatch(path) => writeln!(out, "[ENCODING] Non-UTF8 file: {}", path)?,
            Finding::Unreadable { path, message } => {
                writeln!(out, "[ENCODING] Unreadable entry: {}: {}", path, message)?
            }
        }
    }
    Ok(())
}

pub fn write_scan_banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "🔍 UTF-8 encoding test - searching for artifacts...")?;
    writeln!(out)
}

/// Per-file lines in traversal order. Files matching neither table are silent.
pub fn write_scan_outcomes<W: Write>(report: &ScanReport, out: &mut W) -> io::Result<()> {
    for outcome in &report.outcomes {
        match outcome {
            FileOutcome::Checked {
                path,
                classification: Classification::Problem { found },
            } => {
                writeln!(out, "❌ {}:", path)?;
                for bad in found {
                    writeln!(out, "   - Problem: \"{}\"", bad)?;
                }
            }
            FileOutcome::Checked {
                path,
                classification: Classification::Correct { .. },
            } => writeln!(out, "✅ {}: accents correct", path)?,
            FileOutcome::Checked {
                classification: Classification::Neither,
                ..
            } => {}
            FileOutcome::ReadFailed { path, message } => {
                writeln!(out, "⚠️  {}: read error - {}", path, message)?
            }
            FileOutcome::DirectoryFailed { path, message } => {
                writeln!(out, "⚠️  Directory read error {}: {}", path, message)?
            }
        }
    }
    Ok(())
}

pub fn write_scan_summary<W: Write>(summary: &RunSummary, out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "📊 Summary:")?;
    writeln!(out, "   Total files: {}", summary.total)?;
    writeln!(out, "   ✅ Correct accents: {}", summary.correct)?;
    writeln!(out, "   ❌ Problems detected: {}", summary.problems)?;
    writeln!(out)?;
    if summary.is_clean() {
        writeln!(out, "🎉 All files are correctly encoded!")
    } else {
        writeln!(out, "⚠️  Encoding problems were detected.")
    }
}

/// Banner, per-file lines, then the summary block.
pub fn write_scan<W: Write>(report: &ScanReport, out: &mut W) -> io::Result<()> {
    write_scan_banner(out)?;
    write_scan_outcomes(report, out)?;
    write_scan_summary(&report.summary, out)
}
