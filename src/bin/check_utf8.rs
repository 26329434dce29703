//! `check-utf8` - round-trip UTF-8 gate for CI.
//!
//! Walks the tree (current directory by default), decodes and re-encodes every
//! `.dart`, `.md`, `.yaml`, `.yml` and `.json` file, and prints
//! `[ENCODING] Non-UTF8 file: <path>` on stderr for each one whose byte length
//! changes. Exits 1 if anything was reported, 0 otherwise.

use anyhow::Result;
use camino::Utf8PathBuf;
use clap::Parser;
use std::io::{self, Write};
use std::process::ExitCode;
use utf8_guard::cli::CommonArgs;
use utf8_guard::{APP_NAME, VERSION, config, logging, report, services};

#[derive(Parser, Debug)]
#[command(name = "check-utf8", version, about = "Fail when text files are not clean UTF-8")]
struct Cli {
    /// Directory to validate
    root: Option<Utf8PathBuf>,

    /// Directory name to skip (repeatable); nothing is skipped by default
    #[arg(long = "skip-dir", value_name = "NAME")]
    skip_dirs: Vec<String>,

    #[command(flatten)]
    common: CommonArgs,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let _guard = logging::setup_logging(&cli.common.log_options("check-utf8"))?;
    tracing::info!("Starting {} v{}", APP_NAME, VERSION);

    let config = config::validator_config(cli.root, &cli.skip_dirs)?;
    if cli.common.print_config {
        print!("{}", config::to_yaml(&config)?);
        return Ok(ExitCode::SUCCESS);
    }

    let validation = services::validate(&config);

    let mut stderr = io::stderr().lock();
    report::write_validation(&validation, &mut stderr)?;
    stderr.flush()?;

    Ok(validation.exit_code())
}
