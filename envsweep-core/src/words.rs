//! Identifier segmentation.
//!
//! Splits camelCase, snake_case, and kebab-case identifiers into
//! lowercase words so keyword checks can match whole words instead of
//! substrings.

/// Split an identifier into lowercase words.
///
/// A boundary is inserted wherever a lowercase letter or digit is
/// followed by an uppercase letter; the result is then split on
/// whitespace, underscores, and hyphens. Empty tokens are dropped.
pub fn split_words(identifier: &str) -> Vec<String> {
    let mut spaced = String::with_capacity(identifier.len() + 8);
    let mut prev_lower = false;
    for ch in identifier.chars() {
        if ch.is_uppercase() && prev_lower {
            spaced.push(' ');
        }
        prev_lower = ch.is_lowercase() || ch.is_ascii_digit();
        spaced.push(ch);
    }

    spaced
        .split(|c: char| c.is_whitespace() || c == '_' || c == '-')
        .filter(|token| !token.is_empty())
        .map(|token| token.to_lowercase())
        .collect()
}

/// Canonical snake_case form of an identifier, for rule matching.
///
/// Dots also count as boundaries here, so dotted config keys like
/// `db.password` normalize the same way `db_password` does.
pub fn normalize(identifier: &str) -> String {
    split_words(&identifier.replace('.', "_")).join("_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_case() {
        assert_eq!(split_words("apiKey"), vec!["api", "key"]);
        assert_eq!(split_words("dbConnectionString"), vec!["db", "connection", "string"]);
    }

    #[test]
    fn test_snake_and_kebab() {
        assert_eq!(split_words("DB_PASSWORD"), vec!["db", "password"]);
        assert_eq!(split_words("client-secret"), vec!["client", "secret"]);
    }

    #[test]
    fn test_mixed_casing() {
        assert_eq!(split_words("myApi-key_token"), vec!["my", "api", "key", "token"]);
    }

    #[test]
    fn test_acronym_runs_stay_joined() {
        assert_eq!(split_words("APIKey"), vec!["apikey"]);
    }

    #[test]
    fn test_digit_before_uppercase_is_a_boundary() {
        assert_eq!(split_words("s3Bucket"), vec!["s3", "bucket"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(split_words("").is_empty());
        assert!(split_words("___").is_empty());
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("dbUrl"), "db_url");
        assert_eq!(normalize("MY_S3_BUCKET"), "my_s3_bucket");
        assert_eq!(normalize("db.password"), "db_password");
    }
}
