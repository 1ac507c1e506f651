//! String escaping.

/// Characters that receive a backslash prefix.
const ESCAPED: &[char] = &[
    '*', '+', '?', '^', '$', '{', '}', '(', ')', '|', '[', ']', '\\', '"', '\'',
];

/// Trims surrounding whitespace and backslash-escapes regex metacharacters
/// and quotes.
///
/// # Examples
///
/// ```rust
/// use utilkit::escape_string;
///
/// assert_eq!(escape_string("  a+b  "), r"a\+b");
/// assert_eq!(escape_string(r#"say "hi""#), r#"say \"hi\""#);
/// assert_eq!(escape_string("plain"), "plain");
/// ```
#[must_use]
pub fn escape_string(value: &str) -> String {
    let trimmed = value.trim();
    let mut out = String::with_capacity(trimmed.len() + 8);
    for c in trimmed.chars() {
        if ESCAPED.contains(&c) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escapes_every_occurrence() {
        assert_eq!(escape_string("(a|b)*"), r"\(a\|b\)\*");
        assert_eq!(escape_string("it's"), r"it\'s");
        assert_eq!(escape_string(r"C:\dir"), r"C:\\dir");
    }

    #[test]
    fn test_leaves_other_punctuation() {
        assert_eq!(escape_string("a.b-c/d"), "a.b-c/d");
        assert_eq!(escape_string("   "), "");
    }
}
