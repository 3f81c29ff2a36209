//! Language matcher registry.
//!
//! Maps a file's extension (or well-known filename) to the candidate
//! patterns that locate name/initializer pairs in that language, plus
//! the environment accessors that count as usage there. Each candidate
//! pattern carries its own capture-group indices, so match handling
//! never branches on the extension.

use once_cell::sync::Lazy;
use regex::Regex;
use rustc_hash::FxHashMap;
use std::path::Path;

use crate::preprocess::Preprocess;
use crate::usage::{
    ACTIONS_CONTEXT, CSHARP_ENV, DENO_ENV, GO_ENV, IMPORT_META_ENV, JAVA_ENV, PHP_ENV,
    PROCESS_ENV, PYTHON_ENV, RUBY_ENV, RUST_ENV, SHELL_EXPANSION,
};

/// One way of finding a candidate assignment in a language
pub struct CandidatePattern {
    /// Pattern over the preprocessed text
    pub regex: Regex,
    /// Capture group holding the identifier name
    pub name_group: usize,
    /// Capture group holding the initializer, for shapes that have one
    pub value_group: Option<usize>,
}

impl CandidatePattern {
    fn new(pattern: &str, name_group: usize, value_group: Option<usize>) -> Self {
        Self {
            regex: Regex::new(pattern).expect("invalid candidate pattern"),
            name_group,
            value_group,
        }
    }
}

/// Everything the scanner needs to know about one language
pub struct LanguageSpec {
    /// Cleaning mode applied before matching
    pub preprocess: Preprocess,
    /// Candidate assignment patterns
    pub patterns: Vec<CandidatePattern>,
    /// Environment accessors that count as usage in this language
    pub usage: Vec<&'static Regex>,
}

/// Look up the language spec for a path, or `None` when the file kind
/// is not scanned at all.
pub fn language_for(path: &Path) -> Option<&'static LanguageSpec> {
    REGISTRY.get(registry_key(path)?)
}

/// Resolve a path to a registry key. Well-known filenames win over
/// extensions; `jsx`/`tsx` alias to `js`/`ts`.
fn registry_key(path: &Path) -> Option<&'static str> {
    let file_name = path.file_name()?.to_str()?;
    if file_name == "Dockerfile" || file_name.starts_with("Dockerfile.") {
        return Some("dockerfile");
    }
    if file_name == ".npmrc" {
        return Some("npmrc");
    }
    if file_name == ".env" || file_name.starts_with(".env.") {
        return Some("env");
    }

    let ext = path.extension()?.to_str()?.to_lowercase();
    let key = match ext.as_str() {
        "js" | "jsx" | "mjs" | "cjs" => "js",
        "ts" | "tsx" | "mts" | "cts" => "ts",
        "py" => "py",
        "rb" => "rb",
        "php" => "php",
        "go" => "go",
        "java" => "java",
        "kt" | "kts" => "kt",
        "cs" => "cs",
        "rs" => "rs",
        "vue" => "vue",
        "svelte" => "svelte",
        "html" | "htm" => "html",
        "yml" | "yaml" => "yaml",
        "json" => "json",
        "toml" => "toml",
        "ini" => "ini",
        "properties" => "properties",
        "env" => "env",
        "sh" | "bash" | "zsh" => "sh",
        _ => return None,
    };
    Some(key)
}

static REGISTRY: Lazy<FxHashMap<&'static str, LanguageSpec>> = Lazy::new(|| {
    let mut map = FxHashMap::default();

    map.insert("js", script_spec());
    map.insert("ts", script_spec());
    map.insert("py", assignment_spec(vec![&*PYTHON_ENV]));
    map.insert("rb", assignment_spec(vec![&*RUBY_ENV]));
    map.insert("php", php_spec());
    map.insert("go", go_spec());
    map.insert("java", java_spec());
    map.insert("kt", kotlin_spec());
    map.insert("cs", csharp_spec());
    map.insert("rs", rust_spec());

    map.insert("vue", markup_spec());
    map.insert("svelte", markup_spec());
    map.insert("html", markup_spec());

    map.insert("yaml", yaml_spec());
    map.insert("json", json_spec());
    map.insert("toml", key_value_spec());
    map.insert("ini", key_value_spec());
    map.insert("properties", key_value_spec());
    map.insert("npmrc", npmrc_spec());

    map.insert("sh", shell_spec());
    map.insert("env", shell_spec());
    map.insert("dockerfile", dockerfile_spec());

    map
});

fn js_patterns() -> Vec<CandidatePattern> {
    vec![
        // const/let/var declarations, with optional export and type
        // annotation
        CandidatePattern::new(
            r"(?m)^\s*(?:export\s+)?(?:const|let|var)\s+([A-Za-z_$][A-Za-z0-9_$]*)\s*(?::[^=\n]+)?=\s*([^;\n]+)",
            1,
            Some(2),
        ),
        // Object properties with a quoted value
        CandidatePattern::new(
            r#"(?m)^\s*['"]?([A-Za-z_$][A-Za-z0-9_$]*)['"]?\s*:\s*("[^"\n]*"|'[^'\n]*'|`[^`\n]*`)"#,
            1,
            Some(2),
        ),
    ]
}

fn script_spec() -> LanguageSpec {
    LanguageSpec {
        preprocess: Preprocess::Code,
        patterns: js_patterns(),
        usage: vec![&*PROCESS_ENV, &*IMPORT_META_ENV, &*DENO_ENV],
    }
}

fn markup_spec() -> LanguageSpec {
    let mut patterns = js_patterns();
    // data-* attribute bindings in the remaining markup
    patterns.push(CandidatePattern::new(
        r#"\b(data-[a-z][a-z0-9-]*)\s*=\s*("[^"\n]*"|'[^'\n]*')"#,
        1,
        Some(2),
    ));
    LanguageSpec {
        preprocess: Preprocess::Markup,
        patterns,
        usage: vec![&*PROCESS_ENV, &*IMPORT_META_ENV],
    }
}

/// `NAME = EXPR` statement languages (python, ruby)
fn assignment_spec(usage: Vec<&'static Regex>) -> LanguageSpec {
    LanguageSpec {
        preprocess: Preprocess::Code,
        patterns: vec![CandidatePattern::new(
            r"(?m)^\s*([A-Za-z_][A-Za-z0-9_]*)\s*(?::[^=\n]+)?=\s*([^=\n][^\n]*)",
            1,
            Some(2),
        )],
        usage,
    }
}

fn php_spec() -> LanguageSpec {
    LanguageSpec {
        preprocess: Preprocess::Code,
        patterns: vec![
            CandidatePattern::new(
                r"(?m)^\s*\$([A-Za-z_][A-Za-z0-9_]*)\s*=\s*([^=\n][^;\n]*)",
                1,
                Some(2),
            ),
            CandidatePattern::new(
                r#"(?i)define\s*\(\s*['"]([A-Za-z_][A-Za-z0-9_]*)['"]\s*,\s*([^)\n]+)"#,
                1,
                Some(2),
            ),
            CandidatePattern::new(
                r"(?m)^\s*(?:(?:public|private|protected)\s+)?const\s+([A-Za-z_][A-Za-z0-9_]*)\s*=\s*([^;\n]+)",
                1,
                Some(2),
            ),
        ],
        usage: vec![&*PHP_ENV],
    }
}

fn go_spec() -> LanguageSpec {
    LanguageSpec {
        preprocess: Preprocess::Code,
        patterns: vec![
            CandidatePattern::new(
                r"(?m)^\s*(?:const|var)\s+([A-Za-z_][A-Za-z0-9_]*)\s*(?:[\w\[\]\*\.]+\s*)?=\s*([^\n]+)",
                1,
                Some(2),
            ),
            CandidatePattern::new(
                r"(?m)^\s*([A-Za-z_][A-Za-z0-9_]*)\s*:=\s*([^\n]+)",
                1,
                Some(2),
            ),
            // Members of const/var blocks
            CandidatePattern::new(
                r"(?m)^\s*([A-Za-z_][A-Za-z0-9_]*)\s*=\s*([^=\n][^\n]*)",
                1,
                Some(2),
            ),
        ],
        usage: vec![&*GO_ENV],
    }
}

fn java_spec() -> LanguageSpec {
    LanguageSpec {
        preprocess: Preprocess::Code,
        patterns: vec![CandidatePattern::new(
            r"(?m)^\s*(?:(?:public|private|protected|static|final)\s+)+[A-Za-z_][\w<>,.\[\]]*\s+([A-Za-z_]\w*)\s*=\s*([^;\n]+)",
            1,
            Some(2),
        )],
        usage: vec![&*JAVA_ENV],
    }
}

fn kotlin_spec() -> LanguageSpec {
    LanguageSpec {
        preprocess: Preprocess::Code,
        patterns: vec![CandidatePattern::new(
            r"(?m)^\s*(?:(?:public|private|protected|internal|const|override|lateinit)\s+)*(?:val|var)\s+([A-Za-z_]\w*)\s*(?::[^=\n]+)?=\s*([^;\n]+)",
            1,
            Some(2),
        )],
        usage: vec![&*JAVA_ENV],
    }
}

fn csharp_spec() -> LanguageSpec {
    LanguageSpec {
        preprocess: Preprocess::Code,
        patterns: vec![
            CandidatePattern::new(
                r"(?m)^\s*(?:(?:public|private|protected|internal|static|readonly|const)\s+)+[A-Za-z_][\w<>,.\[\]?]*\s+([A-Za-z_]\w*)\s*=\s*([^;\n]+)",
                1,
                Some(2),
            ),
            CandidatePattern::new(
                r"(?m)^\s*var\s+([A-Za-z_]\w*)\s*=\s*([^;\n]+)",
                1,
                Some(2),
            ),
        ],
        usage: vec![&*CSHARP_ENV],
    }
}

fn rust_spec() -> LanguageSpec {
    LanguageSpec {
        preprocess: Preprocess::Code,
        patterns: vec![
            CandidatePattern::new(
                r"(?m)^\s*(?:pub(?:\([^)]*\))?\s+)?(?:const|static)\s+([A-Za-z_]\w*)\s*:[^=\n]+=\s*([^;\n]+)",
                1,
                Some(2),
            ),
            CandidatePattern::new(
                r"(?m)^\s*let\s+(?:mut\s+)?([A-Za-z_]\w*)\s*(?::[^=\n]+)?=\s*([^;\n]+)",
                1,
                Some(2),
            ),
        ],
        usage: vec![&*RUST_ENV],
    }
}

fn yaml_spec() -> LanguageSpec {
    LanguageSpec {
        preprocess: Preprocess::Plain,
        patterns: vec![
            CandidatePattern::new(
                r"(?m)^[ \t]*(?:-[ \t]+)?([A-Za-z_][A-Za-z0-9_-]*)[ \t]*:[ \t]+([^\n]+)",
                1,
                Some(2),
            ),
            // docker-compose style `- KEY=value` environment lists
            CandidatePattern::new(r"(?m)^[ \t]*-[ \t]+([A-Z_][A-Z0-9_]*)=([^\n]*)", 1, Some(2)),
        ],
        usage: vec![&*ACTIONS_CONTEXT, &*SHELL_EXPANSION],
    }
}

fn json_spec() -> LanguageSpec {
    LanguageSpec {
        preprocess: Preprocess::Plain,
        patterns: vec![CandidatePattern::new(
            r#"(?m)^\s*"([A-Za-z_$][A-Za-z0-9_$.-]*)"[ \t]*:[ \t]*("[^"\n]*")"#,
            1,
            Some(2),
        )],
        usage: vec![&*SHELL_EXPANSION],
    }
}

/// `key = value` config formats (toml, ini, properties)
fn key_value_spec() -> LanguageSpec {
    LanguageSpec {
        preprocess: Preprocess::Plain,
        patterns: vec![CandidatePattern::new(
            r"(?m)^[ \t]*([A-Za-z_][A-Za-z0-9_.-]*)[ \t]*=[ \t]*([^\n]+)",
            1,
            Some(2),
        )],
        usage: vec![&*SHELL_EXPANSION],
    }
}

fn npmrc_spec() -> LanguageSpec {
    let mut spec = key_value_spec();
    // Scoped registry auth lines: //host/:_authToken=...
    spec.patterns.insert(
        0,
        CandidatePattern::new(
            r"(?m)^[ \t]*//[^\n=]*:([A-Za-z_][A-Za-z0-9_-]*)[ \t]*=[ \t]*([^\n]+)",
            1,
            Some(2),
        ),
    );
    spec
}

fn shell_spec() -> LanguageSpec {
    LanguageSpec {
        preprocess: Preprocess::Plain,
        patterns: vec![CandidatePattern::new(
            r"(?m)^[ \t]*(?:(?:export|readonly|local)[ \t]+)?([A-Za-z_][A-Za-z0-9_]*)=([^\n]*)",
            1,
            Some(2),
        )],
        usage: vec![&*SHELL_EXPANSION],
    }
}

fn dockerfile_spec() -> LanguageSpec {
    LanguageSpec {
        preprocess: Preprocess::Plain,
        patterns: vec![
            CandidatePattern::new(
                r"(?mi)^[ \t]*(?:env|arg)[ \t]+([A-Za-z_][A-Za-z0-9_]*)=(\S*)",
                1,
                Some(2),
            ),
            CandidatePattern::new(
                r"(?mi)^[ \t]*env[ \t]+([A-Za-z_][A-Za-z0-9_]*)[ \t]+([^\n]+)",
                1,
                Some(2),
            ),
            // Build args declared without a default have no initializer
            CandidatePattern::new(r"(?mi)^[ \t]*arg[ \t]+([A-Za-z_][A-Za-z0-9_]*)[ \t]*$", 1, None),
        ],
        usage: vec![&*SHELL_EXPANSION],
    }
}
