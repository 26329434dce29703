use camino::Utf8PathBuf;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::config::{
    KNOWN_BAD, KNOWN_GOOD, SCANNER_DEFAULT_ROOT, SCANNER_EXTENSIONS, SCANNER_SKIP_DIRS,
    VALIDATOR_DEFAULT_ROOT, VALIDATOR_EXTENSIONS,
};

/// Settings for the round-trip validator (`check-utf8`).
///
/// The default skip list is empty: every subdirectory is visited unless a
/// directory name is added explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorConfig {
    pub root: Utf8PathBuf,

    /// Extensions (with leading dot) whose files are checked.
    pub extensions: IndexSet<String>,

    #[serde(default)]
    pub skip_dirs: IndexSet<String>,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            root: Utf8PathBuf::from(VALIDATOR_DEFAULT_ROOT),
            extensions: to_set(VALIDATOR_EXTENSIONS),
            skip_dirs: IndexSet::new(),
        }
    }
}

/// Settings for the mojibake scanner (`test-encoding`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScannerConfig {
    pub root: Utf8PathBuf,

    /// File name suffixes whose files are scanned.
    pub extensions: IndexSet<String>,

    /// Directory names never descended into.
    pub skip_dirs: IndexSet<String>,

    /// Skip directories whose name starts with `.`
    pub skip_hidden_dirs: bool,

    /// Corrupted renderings; any hit makes the file a problem.
    pub known_bad: Vec<String>,

    /// Correct renderings of the same words.
    pub known_good: Vec<String>,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            root: Utf8PathBuf::from(SCANNER_DEFAULT_ROOT),
            extensions: to_set(SCANNER_EXTENSIONS),
            skip_dirs: to_set(SCANNER_SKIP_DIRS),
            skip_hidden_dirs: true,
            known_bad: KNOWN_BAD.iter().map(|s| s.to_string()).collect(),
            known_good: KNOWN_GOOD.iter().map(|s| s.to_string()).collect(),
        }
    }
}

fn to_set(values: &[&str]) -> IndexSet<String> {
    values.iter().map(|s| s.to_string()).collect()
}
