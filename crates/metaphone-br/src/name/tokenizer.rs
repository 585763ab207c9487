//! Zero-copy tokenizer for free-text names

use once_cell::sync::Lazy;
use regex::{Matches, Regex};

/// Maximal runs of characters in the Unicode `Letter` category
static LETTERS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\p{L}+").unwrap());

/// Iterator over maximal runs of letters in the input.
///
/// Anything outside the `Letter` category separates tokens, so `d'Ávila`
/// yields `d` and `Ávila`, `Ana-Maria` yields `Ana` and `Maria`, and a
/// combining mark or a letter-like numeral (`Ⅰ`) is a separator too.
pub struct Tokens<'a> {
    matches: Matches<'static, 'a>,
}

impl<'a> Tokens<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            matches: LETTERS.find_iter(input),
        }
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.matches.next().map(|m| m.as_str())
    }
}

/// Uppercase a token one character at a time.
///
/// Characters whose uppercase form is more than one character (`ß`, `ŉ`)
/// are kept as they are, so a word never changes length when uppercased.
pub fn uppercase(token: &str) -> String {
    token
        .chars()
        .map(|c| {
            let mut upper = c.to_uppercase();
            match (upper.next(), upper.next()) {
                (Some(u), None) => u,
                _ => c,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(s: &str) -> Vec<&str> {
        Tokens::new(s).collect()
    }

    #[test]
    fn test_simple_words() {
        assert_eq!(tokens("foo bar baz"), vec!["foo", "bar", "baz"]);
    }

    #[test]
    fn test_accented_letters_stay_in_token() {
        assert_eq!(tokens("Olá Mundo"), vec!["Olá", "Mundo"]);
        assert_eq!(tokens("Conceição"), vec!["Conceição"]);
    }

    #[test]
    fn test_punctuation_splits() {
        assert_eq!(tokens("d'Ávila"), vec!["d", "Ávila"]);
        assert_eq!(tokens("Ana-Maria"), vec!["Ana", "Maria"]);
        assert_eq!(tokens("  Silva,  J. "), vec!["Silva", "J"]);
    }

    #[test]
    fn test_only_letter_category_counts() {
        // U+2160 ROMAN NUMERAL ONE is a letter number, not a letter
        assert_eq!(tokens("Luis \u{2160}"), vec!["Luis"]);
        // U+0363 COMBINING LATIN SMALL LETTER A is a mark
        assert_eq!(tokens("Ana\u{363}b"), vec!["Ana", "b"]);
    }

    #[test]
    fn test_no_letters() {
        assert!(tokens("").is_empty());
        assert!(tokens("123 - 456").is_empty());
        assert!(tokens("\u{2160}\u{2161}").is_empty());
    }

    #[test]
    fn test_uppercase_simple_mapping() {
        assert_eq!(uppercase("Olá"), "OLÁ");
        assert_eq!(uppercase("conceição"), "CONCEIÇÃO");
        assert_eq!(uppercase("Straße"), "STRAßE");
        assert_eq!(uppercase("ŉ"), "ŉ");
    }
}
