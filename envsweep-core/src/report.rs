//! Report types - severity scale, suggestions, and the merged scan report.
//!
//! A scan produces one `ScanReport`: a map from identifier name to the
//! files that read it from the environment and the files that hardcode
//! something that looks like it.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::scanner::FileReport;

/// How likely a hardcoded value is a genuine secret
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// Lowercase label used in reports and CLI flags
    pub fn name(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
            Severity::Critical => "critical",
        }
    }

    /// Parse a lowercase/uppercase label back into a severity
    pub fn parse(label: &str) -> Option<Self> {
        match label.to_ascii_lowercase().as_str() {
            "low" => Some(Severity::Low),
            "medium" => Some(Severity::Medium),
            "high" => Some(Severity::High),
            "critical" => Some(Severity::Critical),
            _ => None,
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A hardcoded candidate recorded for one identifier in one file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Relative path of the file the candidate was found in
    pub file: String,
    /// Literal initializer value, when one could be extracted
    pub value: Option<String>,
    /// Highest severity any rule or heuristic assigned at this site
    pub severity: Option<Severity>,
}

/// Everything known about one identifier across the scanned tree
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Files that read this name from the environment
    pub usage: Vec<String>,
    /// Files where a hardcoded candidate with this name was found
    pub suggested: Vec<Suggestion>,
}

impl Entry {
    /// Maximum severity across all suggestions for this identifier
    pub fn overall_severity(&self) -> Option<Severity> {
        self.suggested.iter().filter_map(|s| s.severity).max()
    }
}

/// Statistics about the walk
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScanStats {
    /// Files handed to the file scanner
    pub files_scanned: usize,
    /// Files skipped (no registry entry, too large, unreadable)
    pub files_skipped: usize,
    /// Directories skipped (ignored or unreadable)
    pub dirs_skipped: usize,
    /// Scan duration in milliseconds
    pub duration_ms: u64,
}

/// Result of scanning a directory tree
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScanReport {
    /// Root directory that was scanned
    pub root: String,
    /// Per-identifier findings, keyed by the name as written in source
    pub entries: BTreeMap<String, Entry>,
    /// Walk statistics
    pub stats: ScanStats,
}

impl ScanReport {
    pub fn new(root: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    /// Merge one file's partial result into the tree-wide accumulator.
    ///
    /// Usage paths are deduplicated per identifier; a file contributes at
    /// most one suggestion per identifier. Together with [`finalize`],
    /// merging is commutative and associative over any set of file reports.
    ///
    /// [`finalize`]: ScanReport::finalize
    pub fn merge_file(&mut self, file: FileReport) {
        for name in file.usage {
            let entry = self.entries.entry(name).or_default();
            if !entry.usage.contains(&file.path) {
                entry.usage.push(file.path.clone());
            }
        }
        for (name, suggestion) in file.candidates {
            let entry = self.entries.entry(name).or_default();
            if !entry.suggested.iter().any(|s| s.file == suggestion.file) {
                entry.suggested.push(suggestion);
            }
        }
    }

    /// Sort usage and suggestion lists so the report is independent of
    /// the order files were merged in.
    pub fn finalize(&mut self) {
        for entry in self.entries.values_mut() {
            entry.usage.sort();
            entry.usage.dedup();
            entry.suggested.sort_by(|a, b| a.file.cmp(&b.file));
        }
    }

    /// Maximum severity across every suggestion in the report
    pub fn max_severity(&self) -> Option<Severity> {
        self.entries.values().filter_map(Entry::overall_severity).max()
    }

    /// Total number of suggestions across all identifiers
    pub fn suggestion_count(&self) -> usize {
        self.entries.values().map(|e| e.suggested.len()).sum()
    }
}
