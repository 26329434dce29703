//! Command-line flags shared by both binaries.

use crate::logging::LogOptions;
use camino::Utf8PathBuf;
use clap::Args;

#[derive(Args, Debug, Clone, Default)]
pub struct CommonArgs {
    /// Log diagnostics at debug level on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Also write diagnostics to a daily-rotated log file in this directory
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<Utf8PathBuf>,

    /// Print the effective configuration as YAML and exit
    #[arg(long)]
    pub print_config: bool,
}

impl CommonArgs {
    pub fn log_options(&self, log_prefix: &str) -> LogOptions {
        LogOptions {
            verbose: self.verbose,
            log_dir: self.log_dir.clone(),
            log_prefix: log_prefix.to_string(),
        }
    }
}
