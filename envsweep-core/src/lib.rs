//! envsweep-core: Environment variable and hardcoded secret scanner
//!
//! This crate provides the scanning engine for envsweep:
//! - Scanner: Recursive tree walking with parallel per-file scanning
//! - Registry: Per-language candidate patterns and env accessors
//! - Preprocess: Comment and markup stripping before matching
//! - Usage: Environment accessor detection across languages
//! - Severity: Rule tables and heuristic scoring for candidates
//! - Report: Merged per-identifier results with scan stats

pub mod error;
pub mod heuristics;
pub mod literal;
pub mod preprocess;
pub mod registry;
pub mod report;
pub mod scanner;
pub mod severity;
pub mod trace;
pub mod usage;
pub mod words;

// Re-exports for convenience
pub use error::ScanError;
pub use preprocess::Preprocess;
pub use registry::{language_for, CandidatePattern, LanguageSpec};
pub use report::{Entry, ScanReport, ScanStats, Severity, Suggestion};
pub use scanner::{scan_file, scan_tree, FileReport, ScanOptions, Walker};
pub use severity::{classify, score_candidate, Rule, NAME_RULES, VALUE_RULES};
pub use trace::init_tracing;
