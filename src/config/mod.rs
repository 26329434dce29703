//! Compiled-in tables and the functions that turn them, plus command-line
//! overrides, into a validated [`ValidatorConfig`] or [`ScannerConfig`].
//!
//! No configuration file or environment variable is ever consulted.

use crate::models::{ScannerConfig, ValidatorConfig};
use anyhow::{Context, Result, bail};
use camino::Utf8PathBuf;
use indexmap::IndexSet;
use serde::Serialize;

/// Extensions checked by the round-trip validator.
pub const VALIDATOR_EXTENSIONS: &[&str] = &[".dart", ".md", ".yaml", ".yml", ".json"];

/// File name suffixes checked by the mojibake scanner.
pub const SCANNER_EXTENSIONS: &[&str] = &[".dart", ".md"];

/// Dependency-cache directories the scanner never enters.
pub const SCANNER_SKIP_DIRS: &[&str] = &["node_modules"];

pub const VALIDATOR_DEFAULT_ROOT: &str = ".";
pub const SCANNER_DEFAULT_ROOT: &str = "lib";

/// Correctly encoded words. Index `i` pairs with `KNOWN_BAD[i]`.
pub const KNOWN_GOOD: &[&str] = &[
    "Rôle",
    "Entrées",
    "Dépôt",
    "Réceptions",
    "Connexion réussie",
    "Aucun profil trouvé",
];

/// The same words after UTF-8 bytes were decoded as Latin-1 and re-saved.
pub const KNOWN_BAD: &[&str] = &[
    "RÃ´le",
    "EntrÃ©es",
    "DÃ©pÃ´t",
    "RÃ©ceptions",
    "Connexion rÃ©ussie",
    "Aucun profil trouvÃ©",
];

/// Build the validator configuration.
///
/// # Arguments
/// * `root` - Overrides the default root (`.`) when given
/// * `skip_dirs` - Directory names to prune; empty keeps the visit-everything behavior
pub fn validator_config(root: Option<Utf8PathBuf>, skip_dirs: &[String]) -> Result<ValidatorConfig> {
    let mut config = ValidatorConfig::default();
    if let Some(root) = root {
        config.root = root;
    }
    config.skip_dirs = collect_dir_names(skip_dirs).context("Invalid --skip-dir value")?;

    validate_extensions(&config.extensions).context("Invalid validator extension list")?;
    tracing::debug!(
        "Validator config: root={}, extensions={:?}, skip_dirs={:?}",
        config.root,
        config.extensions,
        config.skip_dirs
    );
    Ok(config)
}

/// Build the scanner configuration.
///
/// # Arguments
/// * `root` - Overrides the default root (`lib`) when given
pub fn scanner_config(root: Option<Utf8PathBuf>) -> Result<ScannerConfig> {
    let mut config = ScannerConfig::default();
    if let Some(root) = root {
        config.root = root;
    }

    validate_extensions(&config.extensions).context("Invalid scanner extension list")?;
    if config.known_bad.is_empty() {
        bail!("Scanner has no known-bad strings to search for");
    }
    tracing::debug!(
        "Scanner config: root={}, extensions={:?}, skip_dirs={:?}, {} bad / {} good strings",
        config.root,
        config.extensions,
        config.skip_dirs,
        config.known_bad.len(),
        config.known_good.len()
    );
    Ok(config)
}

/// Render a configuration as YAML for `--print-config`.
pub fn to_yaml<T: Serialize>(config: &T) -> Result<String> {
    serde_yaml_ng::to_string(config).context("Failed to serialize configuration to YAML")
}

fn validate_extensions(extensions: &IndexSet<String>) -> Result<()> {
    if extensions.is_empty() {
        bail!("extension list is empty");
    }
    for ext in extensions {
        if !ext.starts_with('.') || ext.len() < 2 {
            bail!("extension {:?} must be a dot followed by at least one character", ext);
        }
    }
    Ok(())
}

fn collect_dir_names(names: &[String]) -> Result<IndexSet<String>> {
    let mut set = IndexSet::new();
    for name in names {
        let name = name.trim();
        if name.is_empty() || name.contains(['/', '\\']) {
            bail!("{:?} is not a plain directory name", name);
        }
        set.insert(name.to_string());
    }
    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_are_paired() {
        assert_eq!(KNOWN_GOOD.len(), KNOWN_BAD.len());
        for (good, bad) in KNOWN_GOOD.iter().zip(KNOWN_BAD) {
            assert_ne!(good, bad);
            assert!(bad.contains('Ã'), "{bad} should carry the mojibake marker");
        }
    }

    #[test]
    fn test_validator_config_overrides() {
        let config = validator_config(
            Some(Utf8PathBuf::from("app")),
            &["build".to_string(), ".dart_tool".to_string(), "build".to_string()],
        )
        .unwrap();

        assert_eq!(config.root, Utf8PathBuf::from("app"));
        assert_eq!(config.skip_dirs.len(), 2);
        assert!(config.skip_dirs.contains(".dart_tool"));
    }

    #[test]
    fn test_validator_config_defaults_visit_everything() {
        let config = validator_config(None, &[]).unwrap();
        assert_eq!(config, ValidatorConfig::default());
    }

    #[test]
    fn test_skip_dir_rejects_paths() {
        assert!(validator_config(None, &["a/b".to_string()]).is_err());
        assert!(validator_config(None, &["  ".to_string()]).is_err());
    }

    #[test]
    fn test_scanner_config_root_override() {
        let config = scanner_config(Some(Utf8PathBuf::from("packages/core/lib"))).unwrap();
        assert_eq!(config.root, Utf8PathBuf::from("packages/core/lib"));
        assert!(config.skip_hidden_dirs);
    }

    #[test]
    fn test_validate_extensions() {
        let good: IndexSet<String> = [".md".to_string()].into_iter().collect();
        assert!(validate_extensions(&good).is_ok());

        let missing_dot: IndexSet<String> = ["md".to_string()].into_iter().collect();
        assert!(validate_extensions(&missing_dot).is_err());

        assert!(validate_extensions(&IndexSet::new()).is_err());
    }

    #[test]
    fn test_to_yaml_lists_tables() {
        let yaml = to_yaml(&ScannerConfig::default()).unwrap();
        assert!(yaml.contains("known_bad"));
        assert!(yaml.contains("node_modules"));
        assert!(yaml.contains("skip_hidden_dirs: true"));
    }
}
