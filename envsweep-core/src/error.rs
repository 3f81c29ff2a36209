//! Scanner errors.
//!
//! Only the scan root is load-bearing: a root that cannot be read fails
//! the whole scan, while unreadable subdirectories and files are skipped
//! and counted in the stats.

use std::path::PathBuf;

/// Errors that can occur during a tree scan.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("IO error scanning {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}
