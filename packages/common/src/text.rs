/// Convert an arbitrary identifier ("button", "proj-42", "hero section")
/// into PascalCase suitable for type and unit names. Non-alphanumeric
/// characters split words; a leading digit is prefixed so the result is a
/// valid identifier in every target language.
pub fn pascal_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut upper_next = true;

    for ch in input.chars() {
        if ch.is_ascii_alphanumeric() {
            if upper_next {
                out.extend(ch.to_uppercase());
                upper_next = false;
            } else {
                out.push(ch);
            }
            if ch.is_ascii_digit() {
                upper_next = true;
            }
        } else {
            upper_next = true;
        }
    }

    if out.is_empty() {
        out.push_str("Unit");
    } else if out.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        out.insert(0, 'X');
    }
    out
}

/// camelCase variant, for function-style unit names
pub fn camel_case(input: &str) -> String {
    let pascal = pascal_case(input);
    let mut chars = pascal.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().collect::<String>() + chars.as_str(),
        None => pascal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pascal_case() {
        assert_eq!(pascal_case("button"), "Button");
        assert_eq!(pascal_case("hero section"), "HeroSection");
        assert_eq!(pascal_case("proj-42"), "Proj42");
        assert_eq!(pascal_case("my_app2go"), "MyApp2Go");
        assert_eq!(pascal_case("42nd"), "X42Nd");
        assert_eq!(pascal_case("--"), "Unit");
    }

    #[test]
    fn test_camel_case() {
        assert_eq!(camel_case("button"), "button");
        assert_eq!(camel_case("hero section"), "heroSection");
    }
}
