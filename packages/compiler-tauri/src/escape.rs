//! Escaping for the Tauri frontend: JS string literals (values are assigned
//! via `textContent`/property setters, never concatenated into HTML) and
//! HTML text for the static host page.

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

/// Escape a value for HTML text content
pub fn html_text(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_js_string_escapes_quotes_and_backslashes() {
        assert_eq!(string_literal(r#"a "b" \c"#), r#""a \"b\" \\c""#);
    }

    #[test]
    fn test_html_text_neutralizes_tags() {
        assert_eq!(html_text("<script>&"), "&lt;script&gt;&amp;");
    }
}
