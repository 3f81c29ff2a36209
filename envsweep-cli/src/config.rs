//! Configuration discovery (`envsweep.toml`) and effective settings.
//!
//! The config file lives at the scan root. Precedence for every setting:
//! CLI > envsweep.toml > defaults.

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use envsweep_core::{ScanOptions, Severity};

pub const CONFIG_FILE: &str = "envsweep.toml";

/// Root configuration loaded from `envsweep.toml`.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub scan: ScanCfg,
}

/// `[scan]` section.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct ScanCfg {
    /// Identifier names left out of reports entirely
    #[serde(default)]
    pub ignore_names: Vec<String>,
    /// Directory names skipped during the walk, beyond the defaults
    #[serde(default)]
    pub ignore_dirs: Vec<String>,
    /// Default display threshold (low|medium|high|critical)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_severity: Option<String>,
}

/// Fully-resolved scan settings after applying precedence.
#[derive(Debug)]
pub struct Effective {
    pub options: ScanOptions,
    pub min_severity: Option<Severity>,
}

/// Load `envsweep.toml` from `root`. Missing file is not an error.
pub fn load(root: &Path) -> Result<Option<Config>> {
    let path = root.join(CONFIG_FILE);
    if !path.exists() {
        return Ok(None);
    }
    let raw = fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
    let config = toml::from_str(&raw).with_context(|| format!("parsing {}", path.display()))?;
    Ok(Some(config))
}

/// Write the config back to `root`.
pub fn save(root: &Path, config: &Config) -> Result<()> {
    let path = root.join(CONFIG_FILE);
    let raw = toml::to_string_pretty(config).context("serializing configuration")?;
    fs::write(&path, raw).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

/// Merge CLI flags with the config file at the scan root.
pub fn resolve(
    path: Option<PathBuf>,
    cli_ignore_dirs: &[String],
    cli_min_severity: Option<Severity>,
) -> Result<Effective> {
    let root = path.unwrap_or_else(|| PathBuf::from("."));
    let config = load(&root)?.unwrap_or_default();

    let mut options = ScanOptions::new(root);
    options
        .extra_ignore_dirs
        .extend(config.scan.ignore_dirs.iter().cloned());
    options
        .extra_ignore_dirs
        .extend(cli_ignore_dirs.iter().cloned());
    options
        .ignored_names
        .extend(config.scan.ignore_names.iter().cloned());

    let file_min = match config.scan.min_severity.as_deref() {
        Some(label) => Some(Severity::parse(label).ok_or_else(|| {
            anyhow!("invalid min_severity {label:?} in {CONFIG_FILE} (use low|medium|high|critical)")
        })?),
        None => None,
    };

    Ok(Effective {
        options,
        min_severity: cli_min_severity.or(file_min),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_config_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load(dir.path()).unwrap().is_none());
    }

    #[test]
    fn test_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.scan.ignore_names.push("NODE_ENV".to_string());
        config.scan.ignore_dirs.push("fixtures".to_string());
        save(dir.path(), &config).unwrap();

        let loaded = load(dir.path()).unwrap().unwrap();
        assert_eq!(loaded.scan.ignore_names, vec!["NODE_ENV"]);
        assert_eq!(loaded.scan.ignore_dirs, vec!["fixtures"]);
        assert!(loaded.scan.min_severity.is_none());
    }

    #[test]
    fn test_cli_flags_override_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE),
            "[scan]\nignore_dirs = [\"generated\"]\nmin_severity = \"low\"\n",
        )
        .unwrap();

        let effective = resolve(
            Some(dir.path().to_path_buf()),
            &["demos".to_string()],
            Some(Severity::High),
        )
        .unwrap();

        assert!(effective
            .options
            .extra_ignore_dirs
            .iter()
            .any(|d| d == "generated"));
        assert!(effective.options.extra_ignore_dirs.iter().any(|d| d == "demos"));
        assert_eq!(effective.min_severity, Some(Severity::High));
    }

    #[test]
    fn test_bad_min_severity_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "[scan]\nmin_severity = \"urgent\"\n").unwrap();
        assert!(resolve(Some(dir.path().to_path_buf()), &[], None).is_err());
    }
}
