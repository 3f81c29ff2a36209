//! Scanner types - options and the per-file partial result

use rustc_hash::{FxHashMap, FxHashSet};
use std::path::PathBuf;

use crate::report::{Severity, Suggestion};

/// Configuration for a tree scan
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Root directory to scan
    pub root: PathBuf,
    /// Directory names to ignore (beyond defaults)
    pub extra_ignore_dirs: Vec<String>,
    /// Identifier names to leave out of the report entirely
    pub ignored_names: FxHashSet<String>,
    /// Maximum file size to process (bytes)
    pub max_file_size: u64,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            extra_ignore_dirs: vec![],
            ignored_names: FxHashSet::default(),
            max_file_size: 10 * 1024 * 1024, // 10MB
        }
    }
}

impl ScanOptions {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }
}

/// One file's findings, before merging into the tree-wide report
#[derive(Debug, Clone)]
pub struct FileReport {
    /// Path the findings are attributed to
    pub path: String,
    /// Names read from the environment in this file
    pub usage: FxHashSet<String>,
    /// Hardcoded candidates, at most one per name
    pub candidates: FxHashMap<String, Suggestion>,
}

impl FileReport {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            usage: FxHashSet::default(),
            candidates: FxHashMap::default(),
        }
    }

    pub fn record_usage(&mut self, name: &str) {
        self.usage.insert(name.to_string());
    }

    /// Record a candidate for `name`. Re-recording the same name keeps
    /// the first extracted literal and raises the severity to the
    /// highest seen.
    pub fn record_candidate(&mut self, name: &str, value: Option<String>, severity: Severity) {
        let file = self.path.clone();
        let suggestion = self
            .candidates
            .entry(name.to_string())
            .or_insert_with(|| Suggestion {
                file,
                value: None,
                severity: None,
            });
        if suggestion.value.is_none() {
            suggestion.value = value;
        }
        suggestion.severity = suggestion.severity.max(Some(severity));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_candidate_is_idempotent() {
        let mut report = FileReport::new("config.ts");
        report.record_candidate("apiKey", Some("sk".to_string()), Severity::Medium);
        report.record_candidate("apiKey", Some("other".to_string()), Severity::Medium);
        assert_eq!(report.candidates.len(), 1);
        assert_eq!(report.candidates["apiKey"].value.as_deref(), Some("sk"));
    }

    #[test]
    fn test_record_candidate_raises_severity() {
        let mut report = FileReport::new("config.ts");
        report.record_candidate("token", None, Severity::Low);
        report.record_candidate("token", None, Severity::Critical);
        report.record_candidate("token", None, Severity::Medium);
        assert_eq!(
            report.candidates["token"].severity,
            Some(Severity::Critical)
        );
    }

    #[test]
    fn test_later_literal_fills_missing_value() {
        let mut report = FileReport::new("Dockerfile");
        report.record_candidate("BUILD_TOKEN", None, Severity::Critical);
        report.record_candidate("BUILD_TOKEN", Some("abc".to_string()), Severity::Medium);
        assert_eq!(report.candidates["BUILD_TOKEN"].value.as_deref(), Some("abc"));
        assert_eq!(
            report.candidates["BUILD_TOKEN"].severity,
            Some(Severity::Critical)
        );
    }
}
