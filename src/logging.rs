use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use tracing_appender::rolling;
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

/// How diagnostic logging is set up for one process.
#[derive(Debug, Clone)]
pub struct LogOptions {
    /// Use debug level instead of warn
    pub verbose: bool,

    /// Also write to a daily-rotated file in this directory
    pub log_dir: Option<Utf8PathBuf>,

    /// Prefix for log file names (e.g., "check-utf8")
    pub log_prefix: String,
}

impl LogOptions {
    fn level(&self) -> &'static str {
        if self.verbose { "debug" } else { "warn" }
    }
}

/// Setup console logging on stderr, plus an optional rotating file appender.
///
/// The default level is warn, so a normal run prints only the report lines.
///
/// # Returns
/// A guard that must be held for the duration of the program to keep file logging active,
/// or `None` when no log directory was requested
pub fn setup_logging(
    options: &LogOptions,
) -> Result<Option<tracing_appender::non_blocking::WorkerGuard>> {
    let console_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_target(false)
        .with_filter(EnvFilter::new(options.level()));

    let (file_layer, guard) = match &options.log_dir {
        Some(log_dir) => {
            ensure_log_dir(log_dir)?;

            // Create daily rotating file appender
            let file_appender = rolling::daily(log_dir, &options.log_prefix);
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

            let layer = tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false) // No ANSI codes in log files
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_filter(EnvFilter::new(options.level()));
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    tracing::debug!(
        "Logging initialized: prefix={}, verbose={}, log_dir={:?}",
        options.log_prefix,
        options.verbose,
        options.log_dir
    );

    Ok(guard)
}

fn ensure_log_dir(log_dir: &Utf8Path) -> Result<()> {
    if !log_dir.exists() {
        fs::create_dir_all(log_dir)
            .with_context(|| format!("Failed to create log directory: {}", log_dir))?;
    }
    Ok(())
}
