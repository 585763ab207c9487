//! Word and phonetic-code similarity primitives
//!
//! Both measures are built on Levenshtein edit distance over characters.

use strsim::levenshtein;

/// Highest possible similarity score
pub const MAX_SIMILARITY: f64 = 1.0;

/// Fraction of the shorter code's length (minus one) tolerated as edits
/// when comparing phonetic codes
pub const LEV_THRESHOLD: f64 = 0.5;

/// Similarity of two words in `[0, 1]`.
///
/// `1 - distance / longest`, where the distance counts characters and the
/// length is the UTF-8 length of the longer word, so an accent costs less
/// than a different letter (`olá`/`ola` scores 0.75). Case-sensitive: this
/// compares spelling, not sound. Two empty words are identical; one empty
/// word against a non-empty one scores 0.
pub fn similarity_between_words(word1: &str, word2: &str) -> f64 {
    let longest = word1.len().max(word2.len());
    if longest == 0 {
        return MAX_SIMILARITY;
    }

    let distance = levenshtein(word1, word2);
    MAX_SIMILARITY - distance as f64 / longest as f64
}

/// Whether two phonetic codes are close enough to be the same sound.
pub fn is_metaphone_similar(code1: &str, code2: &str) -> bool {
    is_metaphone_similar_with(code1, code2, LEV_THRESHOLD)
}

/// [`is_metaphone_similar`] with an explicit tolerance.
///
/// The allowed edit distance is `floor(threshold * (shorter - 1))`, never
/// less than one, so short codes must be nearly equal and longer ones may
/// drift further apart. Lengths are UTF-8 bytes, as in
/// [`similarity_between_words`].
pub fn is_metaphone_similar_with(code1: &str, code2: &str, threshold: f64) -> bool {
    let shorter = code1.len().min(code2.len()) as f64;
    let margin = (threshold * (shorter - 1.0)).floor().max(1.0) as usize;

    levenshtein(code1, code2) <= margin
}
