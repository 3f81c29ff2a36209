//! Scanner module - file scanning and recursive tree traversal
//!
//! - `ignore` crate for gitignore-style directory/file exclusion
//! - `rayon` for parallel per-file scanning
//! - sorted traversal plus sequential merge for deterministic output

mod file;
mod ignores;
mod types;
mod walker;

pub use file::scan_file;
pub use ignores::{IgnoreRules, DEFAULT_IGNORE_DIRS, DEFAULT_IGNORE_FILES};
pub use types::{FileReport, ScanOptions};
pub use walker::{scan_tree, Walker};
