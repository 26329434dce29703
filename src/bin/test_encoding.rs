//! `test-encoding` - mojibake scan of the `lib` tree.
//!
//! Looks for known double-encoded French strings (`RÃ´le`, `DÃ©pÃ´t`, ...)
//! in `.dart` and `.md` files, skipping hidden directories and
//! `node_modules`. Prints a per-file report and a summary on stdout, and
//! exits 1 if any file contains a known-bad string.

use anyhow::Result;
use camino::Utf8PathBuf;
use clap::Parser;
use std::io::{self, Write};
use std::process::ExitCode;
use utf8_guard::cli::CommonArgs;
use utf8_guard::{APP_NAME, VERSION, config, logging, report, services};

#[derive(Parser, Debug)]
#[command(name = "test-encoding", version, about = "Scan Dart and Markdown sources for mojibake")]
struct Cli {
    /// Directory to scan
    root: Option<Utf8PathBuf>,

    #[command(flatten)]
    common: CommonArgs,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let _guard = logging::setup_logging(&cli.common.log_options("test-encoding"))?;
    tracing::info!("Starting {} v{}", APP_NAME, VERSION);

    let config = config::scanner_config(cli.root)?;
    if cli.common.print_config {
        print!("{}", config::to_yaml(&config)?);
        return Ok(ExitCode::SUCCESS);
    }

    let scan = services::scan(&config);

    let mut stdout = io::stdout().lock();
    report::write_scan(&scan, &mut stdout)?;
    stdout.flush()?;

    Ok(scan.exit_code())
}
