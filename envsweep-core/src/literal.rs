//! String literal extraction from initializer expressions.

/// Extract the inner text of a quoted string literal.
///
/// Returns `Some` only when the trimmed expression is a single literal
/// wrapped in matching single quotes, double quotes, or backticks.
/// Concatenations, interpolations, calls, and bare values all yield
/// `None`; an initializer with no extractable literal is still scored
/// by name.
pub fn string_literal(expr: &str) -> Option<String> {
    let trimmed = expr.trim();
    let mut chars = trimmed.chars();
    let quote = chars.next()?;
    if !matches!(quote, '"' | '\'' | '`') {
        return None;
    }
    if trimmed.len() < 2 || !trimmed.ends_with(quote) {
        return None;
    }

    let inner = &trimmed[quote.len_utf8()..trimmed.len() - quote.len_utf8()];

    // An unescaped inner quote means this is more than one literal
    // ("a" + "b", f("x"), ...), so refuse to extract.
    let mut escaped = false;
    for ch in inner.chars() {
        if escaped {
            escaped = false;
        } else if ch == '\\' {
            escaped = true;
        } else if ch == quote {
            return None;
        }
    }

    Some(inner.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_each_quote_style() {
        assert_eq!(string_literal("\"secret\""), Some("secret".to_string()));
        assert_eq!(string_literal("'secret'"), Some("secret".to_string()));
        assert_eq!(string_literal("`secret`"), Some("secret".to_string()));
    }

    #[test]
    fn test_trims_surrounding_whitespace() {
        assert_eq!(string_literal("  'us-east-1' "), Some("us-east-1".to_string()));
    }

    #[test]
    fn test_rejects_bare_values() {
        assert_eq!(string_literal("42"), None);
        assert_eq!(string_literal("true"), None);
        assert_eq!(string_literal("someCall()"), None);
    }

    #[test]
    fn test_rejects_concatenation() {
        assert_eq!(string_literal("\"a\" + \"b\""), None);
        assert_eq!(string_literal("'a' .. 'b'"), None);
    }

    #[test]
    fn test_rejects_trailing_expression() {
        assert_eq!(string_literal("\"a\".toUpperCase()"), None);
    }

    #[test]
    fn test_allows_escaped_quotes_and_newlines() {
        assert_eq!(string_literal("\"a\\\"b\""), Some("a\\\"b".to_string()));
        assert_eq!(string_literal("`line1\nline2`"), Some("line1\nline2".to_string()));
    }

    #[test]
    fn test_mismatched_quotes() {
        assert_eq!(string_literal("\"abc'"), None);
        assert_eq!(string_literal("\""), None);
    }

    #[test]
    fn test_empty_literal() {
        assert_eq!(string_literal("\"\""), Some(String::new()));
    }
}
