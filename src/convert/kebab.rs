// Boundary-insertion recasing. Unlike `tokenizer`, this never splits the
// string into words: separators are rewritten in place.

use crate::convert::tokenizer::trim;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Whitespace (with U+FEFF, without U+0085) and underscores collapse to one hyphen.
    static ref SPACE_OR_UNDERSCORE: Regex = Regex::new(r"[\s\x{FEFF}_&&[^\x{85}]]+").unwrap();
    static ref LOWER_UPPER: Regex = Regex::new(r"([a-z])([A-Z])").unwrap();
}

/// Convert `input` to kebab-case.
///
/// Runs of whitespace or underscores become a single `-`. Hyphens already
/// present are left alone.
///
/// Lowercasing happens before the lower→upper boundary pass, so that pass
/// never matches: `"AnotherExampleHere"` becomes `"anotherexamplehere"`,
/// not `"another-example-here"`.
pub fn to_kebab_case(input: &str) -> String {
    let lowered = trim(input).to_lowercase();
    let hyphenated = SPACE_OR_UNDERSCORE.replace_all(&lowered, "-");
    LOWER_UPPER.replace_all(&hyphenated, "$1-$2").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separators() {
        assert_eq!(to_kebab_case("Hello World"), "hello-world");
        assert_eq!(to_kebab_case("my_variable_name"), "my-variable-name");
        assert_eq!(to_kebab_case("a \t_ b"), "a-b");
    }

    #[test]
    fn test_case_boundaries_are_not_hyphenated() {
        assert_eq!(to_kebab_case("AnotherExampleHere"), "anotherexamplehere");
        assert_eq!(to_kebab_case("camelCase"), "camelcase");
    }

    #[test]
    fn test_existing_hyphens_are_kept() {
        assert_eq!(to_kebab_case("already-kebab"), "already-kebab");
        assert_eq!(to_kebab_case("a - b"), "a---b");
    }

    #[test]
    fn test_trims_before_rewriting() {
        assert_eq!(to_kebab_case("  padded  value  "), "padded-value");
        assert_eq!(to_kebab_case("_edge_"), "-edge-");
    }

    #[test]
    fn test_next_line_is_kept() {
        assert_eq!(to_kebab_case("a\u{85}b"), "a\u{85}b");
        assert_eq!(to_kebab_case("\u{85}X Y"), "\u{85}x-y");
    }

    #[test]
    fn test_blank_input() {
        assert_eq!(to_kebab_case(""), "");
        assert_eq!(to_kebab_case("   "), "");
    }
}
