//! Text manipulation utilities

/// Go reserved words. None of them may be used as an identifier.
pub const GO_KEYWORDS: &[&str] = &[
    "break",
    "case",
    "chan",
    "const",
    "continue",
    "default",
    "defer",
    "else",
    "fallthrough",
    "for",
    "func",
    "go",
    "goto",
    "if",
    "import",
    "interface",
    "map",
    "package",
    "range",
    "return",
    "select",
    "struct",
    "switch",
    "type",
    "var",
];

/// Returns the last `.`-separated segment of a (possibly qualified) name.
fn last_segment(s: &str) -> &str {
    s.rsplit('.').next().unwrap_or(s)
}

/// Keeps only the letters of a string
pub fn letters_only(s: &str) -> String {
    s.chars().filter(|c| c.is_alphabetic()).collect()
}

/// Lowercased first letter of the unqualified part of `s`.
///
/// Falls back to `"u"` for an empty name and to `"z"` when the name
/// contains no letter at all.
pub fn first_letter_lower(s: &str) -> String {
    if s.is_empty() {
        return "u".to_string();
    }
    last_segment(s)
        .chars()
        .find(|c| c.is_alphabetic())
        .map(|c| c.to_lowercase().collect())
        .unwrap_or_else(|| "z".to_string())
}

/// Splits the unqualified part of `s` into its letters-only form and the
/// lowercase of that form, returned as `(lower, clean)`.
pub fn lower_letters(s: &str) -> (String, String) {
    let clean = letters_only(last_segment(s));
    (clean.to_lowercase(), clean)
}

pub fn is_go_keyword(s: &str) -> bool {
    GO_KEYWORDS.contains(&s)
}

/// True if `s` is a syntactically valid, non-keyword Go identifier.
pub fn is_go_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_') && !is_go_keyword(s)
}

/// Quotes `s` as an interpreted Go string literal.
pub fn go_quote(s: &str) -> String {
    let mut quoted = String::with_capacity(s.len() + 2);
    quoted.push('"');
    for c in s.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            c if c.is_control() => quoted.push_str(&format!("\\u{:04x}", c as u32)),
            c => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letters_only_strips_symbols_and_digits() {
        assert_eq!(letters_only("*Impl"), "Impl");
        assert_eq!(letters_only("uint8"), "uint");
        assert_eq!(letters_only("-bad name"), "badname");
        assert_eq!(letters_only("123"), "");
    }

    #[test]
    fn test_first_letter_lower_uses_last_segment() {
        assert_eq!(first_letter_lower("*Impl"), "i");
        assert_eq!(first_letter_lower("rpc.Request"), "r");
        assert_eq!(first_letter_lower("AlmostClientCodec"), "a");
    }

    #[test]
    fn test_first_letter_lower_fallbacks() {
        assert_eq!(first_letter_lower(""), "u");
        assert_eq!(first_letter_lower("[]42"), "z");
    }

    #[test]
    fn test_lower_letters() {
        assert_eq!(lower_letters("ID"), ("id".to_string(), "ID".to_string()));
        assert_eq!(lower_letters("net.IP"), ("ip".to_string(), "IP".to_string()));
        assert_eq!(lower_letters("int"), ("int".to_string(), "int".to_string()));
    }

    #[test]
    fn test_is_go_identifier() {
        assert!(is_go_identifier("Impl"));
        assert!(is_go_identifier("_x1"));
        assert!(!is_go_identifier("1x"));
        assert!(!is_go_identifier("map"));
        assert!(!is_go_identifier("-bad name"));
        assert!(!is_go_identifier(""));
    }

    #[test]
    fn test_go_quote_escapes() {
        assert_eq!(go_quote("*Impl.Close"), "\"*Impl.Close\"");
        assert_eq!(go_quote("a\"b\\c"), "\"a\\\"b\\\\c\"");
        assert_eq!(go_quote("line\nbreak"), "\"line\\nbreak\"");
    }
}
