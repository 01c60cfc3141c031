//! Escaping for the two interpolation positions React emitters use: JSX text
//! children and JS string literals (attribute values are emitted as
//! `{"..."}` expressions so they only need the literal form).

/// Escape a value for placement as JSX text content. Braces open JSX
/// expressions and angle brackets open tags, so all of them are entity-encoded.
pub fn jsx_text(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '{' => out.push_str("&#123;"),
            '}' => out.push_str("&#125;"),
            c => out.push(c),
        }
    }
    out
}

/// Escape a value for placement inside a double-quoted JS string literal
pub fn js_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            c if (c as u32) < 0x20 => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out
}

/// Quoted JS string literal
pub fn string_literal(value: &str) -> String {
    format!("\"{}\"", js_string(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jsx_text_neutralizes_braces_and_tags() {
        assert_eq!(jsx_text("{alert(1)}"), "&#123;alert(1)&#125;");
        assert_eq!(jsx_text("<script>"), "&lt;script&gt;");
        assert_eq!(jsx_text("a & b"), "a &amp; b");
    }

    #[test]
    fn test_js_string_escapes_quotes() {
        assert_eq!(string_literal(r#"Say "hi""#), r#""Say \"hi\"""#);
    }

    #[test]
    fn test_js_string_escapes_line_separators() {
        assert_eq!(js_string("a\u{2028}b"), "a\\u2028b");
    }

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(jsx_text("Sign In"), "Sign In");
        assert_eq!(js_string("Sign In"), "Sign In");
    }
}
