// Joiners for split-and-rejoin output. Tokens arrive lowercased and non-empty.

pub fn camel<S: AsRef<str>>(words: &[S]) -> String {
    let mut out = String::with_capacity(words.iter().map(|w| w.as_ref().len()).sum());

    for (i, word) in words.iter().enumerate() {
        let word = word.as_ref();
        if i == 0 {
            out.push_str(word);
            continue;
        }

        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            // Characters outside the BMP are left as-is.
            if first.len_utf16() == 1 {
                out.extend(first.to_uppercase());
            } else {
                out.push(first);
            }
            out.push_str(chars.as_str());
        }
    }

    out
}

pub fn dot<S: AsRef<str>>(words: &[S]) -> String {
    words
        .iter()
        .map(|w| w.as_ref())
        .collect::<Vec<_>>()
        .join(".")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel() {
        assert_eq!(camel(&["first", "name"]), "firstName");
        assert_eq!(camel(&["a", "b", "c"]), "aBC");
        assert_eq!(camel(&["single"]), "single");
    }

    #[test]
    fn test_camel_first_char_expansion() {
        assert_eq!(camel(&["straße", "ßig"]), "straßeSSig");
    }

    #[test]
    fn test_camel_keeps_supplementary_first_char() {
        assert_eq!(camel(&["a", "\u{10428}x"]), "a\u{10428}x");
        assert_eq!(camel(&["a", "x\u{10428}"]), "aX\u{10428}");
    }

    #[test]
    fn test_dot() {
        assert_eq!(dot(&["user", "id"]), "user.id");
        assert_eq!(dot(&["single"]), "single");
    }

    #[test]
    fn test_empty() {
        let none: [&str; 0] = [];
        assert_eq!(camel(&none), "");
        assert_eq!(dot(&none), "");
    }
}
