//! Escaping for Swift string literals.
//!
//! Property values are interpolated into generated source, so every value
//! must be encoded for Swift's string grammar. The backslash escape also
//! neutralizes `\(...)` interpolation sequences in user input.

/// Escape a value for placement inside a double-quoted Swift string literal
pub fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\0' => out.push_str("\\0"),
            c if (c as u32) < 0x20 => out.push_str(&format!("\\u{{{:x}}}", c as u32)),
            c => out.push(c),
        }
    }
    out
}

/// Quoted Swift string literal
pub fn string_literal(value: &str) -> String {
    format!("\"{}\"", escape(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escapes_quotes() {
        assert_eq!(string_literal(r#"Say "hi""#), r#""Say \"hi\"""#);
    }

    #[test]
    fn test_neutralizes_interpolation() {
        // `\(expr)` must not survive as an interpolation sequence
        assert_eq!(escape(r"\(evil())"), r"\\(evil())");
    }

    #[test]
    fn test_escapes_newlines_and_tabs() {
        assert_eq!(escape("a\nb\tc"), "a\\nb\\tc");
    }

    #[test]
    fn test_control_characters_use_unicode_scalars() {
        assert_eq!(escape("\u{7}"), "\\u{7}");
    }

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(escape("Sign In"), "Sign In");
    }
}
