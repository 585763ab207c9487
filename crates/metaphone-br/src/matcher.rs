//! NameMatcher - multi-word name similarity
//!
//! Words of the subject name are aligned left to right against the
//! candidate. Each subject word takes the first unused candidate word whose
//! phonetic code is equal or close enough; the search position only moves
//! forward, so a candidate word is never reused and word order matters.
//! Prepositions are never aligned but still count towards the score.
//!
//! The alignment is greedy: an early subject word can consume a candidate
//! word that a later one would have matched better. Callers rely on this
//! ordering, so it is not an optimal assignment.

use serde::Serialize;
use tracing::debug;

use crate::config::MatchConfig;
use crate::error::{NameError, NameResult};
use crate::name::{parse, ParsedName};
use crate::similarity::{is_metaphone_similar_with, similarity_between_words, MAX_SIMILARITY};

/// One aligned word pair
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WordMatch {
    /// Index into the subject's words
    pub subject: usize,
    /// Index into the candidate's words
    pub candidate: usize,
    /// Spelling similarity of the two words
    pub similarity: f64,
    /// `"exact"` for equal codes, `"phonetic"` for close codes
    pub strategy: &'static str,
}

/// Result of aligning two names
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Alignment {
    pub matches: Vec<WordMatch>,
    /// Prepositions on both sides deducted from the word count
    pub prepositions: usize,
    pub score: f64,
}

/// Candidate found for a single subject word
struct Hit {
    candidate: usize,
    similarity: f64,
    strategy: &'static str,
    skipped_prepositions: usize,
}

/// Name matcher with its configuration
#[derive(Debug, Clone, Default)]
pub struct NameMatcher {
    config: MatchConfig,
}

impl NameMatcher {
    /// Create a matcher with default configuration
    pub fn new() -> Self {
        Self::with_config(MatchConfig::default())
    }

    /// Create with custom configuration
    pub fn with_config(config: MatchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Similarity of `candidate` to `subject` in `[0, 1]`
    pub fn sim(&self, subject: &ParsedName, candidate: &ParsedName) -> f64 {
        self.align(subject, candidate).score
    }

    /// Parse `text` as the candidate and compare it to `subject`
    pub fn sim_str(&self, subject: &ParsedName, text: &str) -> NameResult<f64> {
        let candidate = parse(text).ok_or_else(|| NameError::InvalidName(text.to_string()))?;
        Ok(self.sim(subject, &candidate))
    }

    /// Align the words of two names and score the result.
    ///
    /// The score is the product of the aligned words' spelling similarities
    /// scaled by `2 * matches / (words on both sides - prepositions)`.
    pub fn align(&self, subject: &ParsedName, candidate: &ParsedName) -> Alignment {
        let mut similarity = MAX_SIMILARITY;
        let mut matches = Vec::new();
        let mut prepositions = 0;
        let mut pos = 0;

        for (i, (word, code)) in subject.iter().enumerate() {
            if self.config.is_preposition(word) {
                prepositions += 1;
                continue;
            }

            let Some(hit) = self.find(word, code, candidate, pos) else {
                debug!(word, code, from = pos, "no candidate word");
                continue;
            };

            debug!(
                word,
                code,
                candidate = %candidate.words()[hit.candidate],
                similarity = hit.similarity,
                strategy = hit.strategy,
                "aligned word"
            );

            similarity *= hit.similarity;
            prepositions += hit.skipped_prepositions;
            pos = hit.candidate + 1;
            matches.push(WordMatch {
                subject: i,
                candidate: hit.candidate,
                similarity: hit.similarity,
                strategy: hit.strategy,
            });
        }

        let words = subject.len() + candidate.len();
        let denominator = words.saturating_sub(prepositions);
        let score = if matches.is_empty() || denominator == 0 {
            0.0
        } else {
            similarity * (2 * matches.len()) as f64 / denominator as f64
        };

        debug!(
            subject = %subject,
            candidate = %candidate,
            matches = matches.len(),
            prepositions,
            score,
            "name similarity"
        );

        Alignment {
            matches,
            prepositions,
            score,
        }
    }

    /// First candidate word from `pos` matching `code`.
    ///
    /// Prepositions passed on the way are reported so the caller can deduct
    /// them. A word with zero spelling similarity ends the search unmatched.
    fn find(&self, word: &str, code: &str, candidate: &ParsedName, pos: usize) -> Option<Hit> {
        let mut skipped_prepositions = 0;

        for (j, (other_word, other_code)) in candidate.iter().enumerate().skip(pos) {
            if self.config.is_preposition(other_word) {
                skipped_prepositions += 1;
                continue;
            }

            let strategy = if code == other_code {
                "exact"
            } else if is_metaphone_similar_with(code, other_code, self.config.lev_threshold) {
                "phonetic"
            } else {
                continue;
            };

            let similarity = similarity_between_words(word, other_word);
            return (similarity > 0.0).then_some(Hit {
                candidate: j,
                similarity,
                strategy,
                skipped_prepositions,
            });
        }

        None
    }
}
