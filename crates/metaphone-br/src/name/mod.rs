//! Parsed Names
//!
//! A [`ParsedName`] pairs every letter token of a name, uppercased, with its
//! phonetic code. Accents are kept in the words; only the codes are computed
//! from the folded spelling.
//!
//! # Example
//!
//! ```rust
//! use metaphone_br::name::parse;
//!
//! let name = parse("Olá Mundo").unwrap();
//! assert_eq!(name.words(), ["OLÁ", "MUNDO"]);
//! assert_eq!(name.codes(), ["Ul", "MD"]);
//! assert_eq!(name.to_string(), "OLÁ MUNDO (Ul MD)");
//!
//! assert!(parse("1234").is_none());
//! ```

mod tokenizer;

pub use tokenizer::{uppercase, Tokens};

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{NameError, NameResult};
use crate::matcher::NameMatcher;
use crate::phonetic::pack;

/// A name split into uppercase words and their phonetic codes.
///
/// `words` and `codes` always have the same, non-zero length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedName {
    words: Vec<String>,
    codes: Vec<String>,
}

/// Parse free text into a name.
///
/// Returns `None` when the text contains no letters.
pub fn parse(text: &str) -> Option<ParsedName> {
    let words: Vec<String> = Tokens::new(text).map(uppercase).collect();
    if words.is_empty() {
        return None;
    }

    let codes = words.iter().map(|w| pack(w)).collect();
    Some(ParsedName { words, codes })
}

impl ParsedName {
    /// Uppercase words in their original order
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Phonetic code of each word
    pub fn codes(&self) -> &[String] {
        &self.codes
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate `(word, code)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.words
            .iter()
            .zip(&self.codes)
            .map(|(w, c)| (w.as_str(), c.as_str()))
    }

    /// Similarity to another name in `[0, 1]`, using the default matcher
    pub fn sim(&self, other: &ParsedName) -> f64 {
        NameMatcher::new().sim(self, other)
    }

    /// Parse `text` and compare it to this name.
    ///
    /// Fails with [`NameError::InvalidName`] when `text` has no letters; the
    /// error's [`score`](NameError::score) is the `-1` sentinel.
    pub fn sim_str(&self, text: &str) -> NameResult<f64> {
        NameMatcher::new().sim_str(self, text)
    }
}

impl fmt::Display for ParsedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.words.join(" "), self.codes.join(" "))
    }
}

impl FromStr for ParsedName {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s).ok_or_else(|| NameError::InvalidName(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_simple_names() {
        let name = parse("Olá Mundo").unwrap();
        assert_eq!(name.words(), ["OLÁ", "MUNDO"]);
        assert_eq!(name.codes(), ["Ul", "MD"]);

        let name = parse("foo bar baz").unwrap();
        assert_eq!(name.words(), ["FOO", "BAR", "BAZ"]);
        assert_eq!(name.codes(), ["F", "BR", "BS"]);
    }

    #[test]
    fn test_parse_empty() {
        assert!(parse("").is_none());
        assert!(parse(" - 42 . ").is_none());
    }

    #[test]
    fn test_parallel_lengths() {
        let name = parse("Ana-Maria d'Ávila dos Santos").unwrap();
        assert_eq!(name.len(), 6);
        assert_eq!(name.words().len(), name.codes().len());
        assert!(!name.is_empty());
    }

    #[test]
    fn test_non_letters_split_words() {
        let name = parse("Ana\u{363}b \u{2160}").unwrap();
        assert_eq!(name.words(), ["ANA", "B"]);
    }

    #[test]
    fn test_uppercase_keeps_word_length() {
        let name = parse("Straße").unwrap();
        assert_eq!(name.words(), ["STRAßE"]);
    }

    #[test]
    fn test_display() {
        let name = parse("Olá Mundo").unwrap();
        assert_eq!(name.to_string(), "OLÁ MUNDO (Ul MD)");
    }

    #[test]
    fn test_iter_pairs() {
        let name = parse("caro carro").unwrap();
        let pairs: Vec<(&str, &str)> = name.iter().collect();
        assert_eq!(pairs, vec![("CARO", "KR"), ("CARRO", "K2")]);
    }

    #[test]
    fn test_from_str() {
        let name: ParsedName = "Maria Silva".parse().unwrap();
        assert_eq!(name.words(), ["MARIA", "SILVA"]);

        let err = "!!!".parse::<ParsedName>().unwrap_err();
        assert_eq!(err, NameError::InvalidName("!!!".to_string()));
        assert_eq!(err.score(), -1.0);
    }

    #[test]
    fn test_serialize() {
        let name = parse("Olá").unwrap();
        let json = serde_json::to_value(&name).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "words": ["OLÁ"], "codes": ["Ul"] })
        );
    }
}
