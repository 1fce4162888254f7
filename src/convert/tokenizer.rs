// Split-and-rejoin tokenization shared by the camelCase and dot.case joiners.

/// Whitespace as the trim and separator rules see it: Unicode `White_Space`
/// plus the byte-order mark, minus NEL (U+0085).
pub fn is_space(ch: char) -> bool {
    (ch.is_whitespace() && ch != '\u{85}') || ch == '\u{feff}'
}

/// Separator set for split-and-rejoin: whitespace, underscore, hyphen.
pub fn is_separator(ch: char) -> bool {
    is_space(ch) || ch == '_' || ch == '-'
}

pub fn trim(input: &str) -> &str {
    input.trim_matches(is_space)
}

/// Break `input` into non-empty lowercase words.
///
/// Runs of separators count as one boundary, so the result never holds an
/// empty token. Blank input yields an empty vector.
pub fn tokenize(input: &str) -> Vec<String> {
    if input.is_empty() {
        return Vec::new();
    }

    let trimmed = trim(input);
    if trimmed.is_empty() {
        return Vec::new();
    }

    let mut words = Vec::new();
    let mut current = String::new();

    for ch in trimmed.chars() {
        if is_separator(ch) {
            if !current.is_empty() {
                words.push(current.to_lowercase());
                current.clear();
            }
        } else {
            current.push(ch);
        }
    }

    if !current.is_empty() {
        words.push(current.to_lowercase());
    }

    tracing::trace!(?words, "tokenized");
    words
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separator_runs() {
        assert_eq!(tokenize("first name"), vec!["first", "name"]);
        assert_eq!(tokenize("USER_ID"), vec!["user", "id"]);
        assert_eq!(tokenize("a -_ b\t\nc"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_leading_and_trailing_separators() {
        assert_eq!(tokenize("  mobile-number "), vec!["mobile", "number"]);
        assert_eq!(tokenize("__private_field__"), vec!["private", "field"]);
        assert_eq!(tokenize("-x-"), vec!["x"]);
    }

    #[test]
    fn test_blank_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   ").is_empty());
        assert!(tokenize("_-_").is_empty());
        assert!(tokenize("\u{feff} \u{a0}").is_empty());
    }

    #[test]
    fn test_next_line_is_not_whitespace() {
        assert!(!is_space('\u{85}'));
        assert_eq!(tokenize("a\u{85}b"), vec!["a\u{85}b"]);
        assert_eq!(tokenize("\u{85}x "), vec!["\u{85}x"]);
    }

    #[test]
    fn test_case_boundaries_are_not_split() {
        // Only explicit separators delimit words here.
        assert_eq!(tokenize("camelCase"), vec!["camelcase"]);
    }

    #[test]
    fn test_dots_are_not_separators() {
        assert_eq!(tokenize("first.name"), vec!["first.name"]);
    }

    #[test]
    fn test_non_ascii_lowercasing() {
        assert_eq!(tokenize("ÉCOLE Über"), vec!["école", "über"]);
    }
}
