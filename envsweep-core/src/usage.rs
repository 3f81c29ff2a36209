//! Environment read detection.
//!
//! Accessor patterns that recognize a *confirmed* environment variable
//! read, per language family. Every pattern captures the ALL-CAPS
//! variable name; the registry wires each language to the accessors
//! that exist in it.

use once_cell::sync::Lazy;
use regex::Regex;

pub static PROCESS_ENV: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"process\.env\.([A-Z_][A-Z0-9_]*)|process\.env\[['"]([A-Z_][A-Z0-9_]*)['"]\]"#,
    )
    .expect("invalid process.env pattern")
});

pub static IMPORT_META_ENV: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"import\.meta\.env\.([A-Z_][A-Z0-9_]*)").expect("invalid import.meta pattern")
});

pub static DENO_ENV: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"Deno\.env\.get\(['"]([A-Z_][A-Z0-9_]*)['"]\)"#).expect("invalid Deno.env pattern")
});

pub static PYTHON_ENV: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"os\.environ\[['"]([A-Z_][A-Z0-9_]*)['"]\]|os\.environ\.get\(['"]([A-Z_][A-Z0-9_]*)['"]|os\.getenv\(['"]([A-Z_][A-Z0-9_]*)['"]"#,
    )
    .expect("invalid os.environ pattern")
});

pub static RUBY_ENV: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"ENV\[['"]([A-Z_][A-Z0-9_]*)['"]\]|ENV\.fetch\(['"]([A-Z_][A-Z0-9_]*)['"]"#)
        .expect("invalid ENV pattern")
});

pub static PHP_ENV: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"getenv\(['"]([A-Z_][A-Z0-9_]*)['"]\)|\$_(?:ENV|SERVER)\[['"]([A-Z_][A-Z0-9_]*)['"]\]"#,
    )
    .expect("invalid getenv pattern")
});

pub static GO_ENV: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"os\.(?:Getenv|LookupEnv)\(['"]([A-Z_][A-Z0-9_]*)['"]\)"#)
        .expect("invalid os.Getenv pattern")
});

pub static JAVA_ENV: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"System\.getenv\(['"]([A-Z_][A-Z0-9_]*)['"]\)"#)
        .expect("invalid System.getenv pattern")
});

pub static CSHARP_ENV: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"Environment\.GetEnvironmentVariable\(['"]([A-Z_][A-Z0-9_]*)['"]\)"#)
        .expect("invalid GetEnvironmentVariable pattern")
});

pub static RUST_ENV: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"env::var(?:_os)?\(['"]([A-Z_][A-Z0-9_]*)['"]\)"#)
        .expect("invalid env::var pattern")
});

/// `$NAME` / `${NAME}` expansions in shell-flavored text
pub static SHELL_EXPANSION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\$\{?([A-Z_][A-Z0-9_]*)\}?").expect("invalid expansion pattern")
});

/// `${{ secrets.NAME }}` style CI context references
pub static ACTIONS_CONTEXT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\$\{\{\s*(?:secrets|env|vars)\.([A-Z_][A-Z0-9_]*)\s*\}\}")
        .expect("invalid actions context pattern")
});

static ENV_REFERENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"process\.env|import\.meta\.env|Deno\.env|os\.environ|os\.getenv|getenv\(|System\.getenv|GetEnvironmentVariable|env::var|ENV\[|ENV\.fetch|os\.Getenv|os\.LookupEnv|\$_ENV|\$_SERVER|dotenv|\benv\(|\$\{\{|\$\{?[A-Z_][A-Z0-9_]*",
    )
    .expect("invalid env reference pattern")
});

/// Whether an initializer expression is itself an environment read, an
/// env-file dereference, a shell expansion, or a `${{ ... }}` CI
/// context expression. Such initializers are usage, never hardcoded
/// candidates.
pub fn is_env_reference(expr: &str) -> bool {
    ENV_REFERENCE.is_match(expr)
}

/// First non-empty capture of a match, in pattern order.
pub fn first_capture<'t>(cap: &regex::Captures<'t>) -> Option<&'t str> {
    cap.iter().skip(1).flatten().next().map(|m| m.as_str())
}
