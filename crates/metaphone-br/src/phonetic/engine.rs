//! Cursor scan over the rule table

use tracing::trace;

use super::rules::{Rule, RULES, VOWELS};
use crate::normalize::fold_accents;

/// Phonetic code of a single word.
///
/// Accents are folded first. If no rule matches anywhere in the word the
/// code falls back to the uppercased word with its vowels removed.
pub fn pack(word: &str) -> String {
    let folded = fold_accents(word);
    let chars: Vec<char> = folded.chars().collect();

    let code = encode(&chars, RULES);
    if !code.is_empty() {
        return code;
    }

    let fallback: String = chars
        .iter()
        .filter(|c| !VOWELS.contains(c.to_ascii_lowercase()))
        .flat_map(|c| c.to_uppercase())
        .collect();
    trace!(word, code = %fallback, "no rule matched, using consonant skeleton");
    fallback
}

/// Run `rules` over `word` and collect the emitted symbols
pub(crate) fn encode(word: &[char], rules: &[Rule]) -> String {
    let mut code = String::new();
    let mut cursor = 0;

    while cursor < word.len() {
        let hit = rules
            .iter()
            .enumerate()
            .find(|(_, rule)| rule.matches_at(word, cursor));

        let step = match hit {
            Some((index, rule)) => {
                trace!(cursor, rule = index, symbol = rule.code(), "rule matched");
                code.push_str(rule.code());
                rule.increment()
            }
            None => 0,
        };

        // Always make progress, even for a zero-increment rule
        cursor += step.max(1);
    }

    code
}
