//! Escaping for Kotlin string literals. `$` must be escaped or user input
//! becomes a template expression.

/// Escape a value for placement inside a double-quoted Kotlin string literal
pub fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '$' => out.push_str("\\$"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out
}

/// Quoted Kotlin string literal
pub fn string_literal(value: &str) -> String {
    format!("\"{}\"", escape(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escapes_template_expressions() {
        assert_eq!(escape("${exploit()}"), "\\${exploit()}");
        assert_eq!(escape("$user"), "\\$user");
    }

    #[test]
    fn test_escapes_quotes_and_backslashes() {
        assert_eq!(string_literal(r#"a "b" \c"#), r#""a \"b\" \\c""#);
    }

    #[test]
    fn test_control_characters_use_unicode_escapes() {
        assert_eq!(escape("\u{1b}"), "\\u001b");
    }
}
