//! Ignore rules for dependency, build, and VCS directories.
//!
//! Note the list deliberately does NOT contain `.env`: env files are
//! prime scanning targets here, and they are routinely gitignored, which
//! is also why the project's `.gitignore` is not loaded automatically.
//! Only `.envsweepignore` is honored.

use ignore::gitignore::{Gitignore, GitignoreBuilder};
use std::path::Path;

/// Directory names that are never descended into
pub const DEFAULT_IGNORE_DIRS: &[&str] = &[
    // Package managers
    "node_modules",
    ".pnpm",
    ".yarn",
    ".npm",
    "bower_components",
    "jspm_packages",
    // Python
    "__pycache__",
    ".venv",
    "venv",
    "virtualenv",
    "site-packages",
    ".tox",
    ".eggs",
    // JVM
    ".gradle",
    ".m2",
    // .NET
    "bin",
    "obj",
    ".nuget",
    // PHP / Go / Ruby
    "vendor",
    ".bundle",
    // Version control
    ".git",
    ".svn",
    ".hg",
    // IDE / editor
    ".idea",
    ".vscode",
    ".vs",
    // Build outputs
    "target",
    "build",
    "dist",
    "out",
    "output",
    "_build",
    ".build",
    // Coverage
    "coverage",
    ".nyc_output",
    "htmlcov",
    // Caches
    ".cache",
    ".parcel-cache",
    ".next",
    ".nuxt",
    ".turbo",
    ".terraform",
    // Temp
    "tmp",
    ".tmp",
];

/// File patterns skipped even when the extension is recognized
pub const DEFAULT_IGNORE_FILES: &[&str] = &[
    // Lock files are machine-generated and huge
    "package-lock.json",
    "yarn.lock",
    "pnpm-lock.yaml",
    "composer.lock",
    "Gemfile.lock",
    "poetry.lock",
    "Cargo.lock",
    // Bundled / generated
    "*.min.js",
    "*.min.css",
    "*.map",
];

/// Compiled ignore rules for one scan
pub struct IgnoreRules {
    gitignore: Gitignore,
}

impl IgnoreRules {
    /// Build rules from the defaults plus caller-supplied directory names.
    pub fn new(root: &Path, extra_dirs: &[String]) -> Self {
        let mut builder = GitignoreBuilder::new(root);

        // Trailing slash scopes each name to directories
        for name in DEFAULT_IGNORE_DIRS {
            let _ = builder.add_line(None, &format!("{name}/"));
        }
        for pattern in DEFAULT_IGNORE_FILES {
            let _ = builder.add_line(None, pattern);
        }
        for name in extra_dirs {
            let _ = builder.add_line(None, &format!("{name}/"));
        }

        let envsweepignore = root.join(".envsweepignore");
        if envsweepignore.exists() {
            let _ = builder.add(&envsweepignore);
        }

        Self {
            gitignore: builder.build().unwrap_or_else(|_| Gitignore::empty()),
        }
    }

    /// Check whether a root-relative path should be skipped
    pub fn is_ignored(&self, path: &Path, is_dir: bool) -> bool {
        self.gitignore.matched(path, is_dir).is_ignore()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn rules() -> IgnoreRules {
        IgnoreRules::new(&PathBuf::from("/project"), &[])
    }

    #[test]
    fn test_ignores_dependency_dirs() {
        let rules = rules();
        assert!(rules.is_ignored(Path::new("node_modules"), true));
        assert!(rules.is_ignored(Path::new("web/node_modules"), true));
        assert!(rules.is_ignored(Path::new(".git"), true));
    }

    #[test]
    fn test_ignores_lock_and_minified_files() {
        let rules = rules();
        assert!(rules.is_ignored(Path::new("package-lock.json"), false));
        assert!(rules.is_ignored(Path::new("assets/bundle.min.js"), false));
    }

    #[test]
    fn test_env_files_are_not_ignored() {
        let rules = rules();
        assert!(!rules.is_ignored(Path::new(".env"), false));
        assert!(!rules.is_ignored(Path::new("config/.env.production"), false));
    }

    #[test]
    fn test_dir_names_do_not_ignore_files() {
        let rules = rules();
        // A file that happens to share an ignored directory's name
        assert!(!rules.is_ignored(Path::new("build"), false));
    }

    #[test]
    fn test_extra_dirs() {
        let rules = IgnoreRules::new(&PathBuf::from("/project"), &["fixtures".to_string()]);
        assert!(rules.is_ignored(Path::new("tests/fixtures"), true));
        assert!(!rules.is_ignored(Path::new("tests/helpers"), true));
    }
}
