//! Ordered rewrite rules for Brazilian Portuguese
//!
//! Each rule anchors a short pattern at `cursor + offset` and, on a match,
//! emits its code and moves the cursor forward by `increment`. Rules are
//! tried strictly in table order and the first match wins, so the order
//! below is part of the encoding: `chr` must precede the generic `c` rules
//! it would otherwise lose to, `sch` precedes `sc` precedes `s`, and so on.
//!
//! # Notation
//!
//! ```text
//! ^        only at the start of the word (vowel rules)
//! $        end of the word
//! [..]     any one of the listed letters
//! v / c    any vowel / any consonant
//! .        any character
//! ```
//!
//! Matching is case-insensitive. A negative offset lets a rule look at
//! characters the cursor has already passed without consuming them again.

/// Vowels recognised by the rules
pub const VOWELS: &str = "aeiou";

/// Consonants recognised by the rules (`y` is treated as neither)
pub const CONSONANTS: &str = "bcdfghjklmnpqrstvwxz";

/// Consonants without the silent `h`
const CONSONANTS_NO_H: &str = "bcdfgjklmnpqrstvwxz";

/// One position of a rule pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// A specific letter
    Is(char),
    /// Any one of the listed letters
    OneOf(&'static str),
    /// Any one of the listed letters, or the end of the word
    OneOfOrEnd(&'static str),
    /// Any vowel
    Vowel,
    /// Any consonant
    Consonant,
    /// Any character except a newline
    Any,
    /// End of the word; consumes nothing
    End,
}

impl Slot {
    /// Whether this slot accepts `c` (case-insensitive)
    #[inline]
    fn accepts(self, c: char) -> bool {
        let c = c.to_ascii_lowercase();
        match self {
            Slot::Is(letter) => c == letter,
            Slot::OneOf(set) | Slot::OneOfOrEnd(set) => set.contains(c),
            Slot::Vowel => VOWELS.contains(c),
            Slot::Consonant => CONSONANTS.contains(c),
            Slot::Any => c != '\n',
            Slot::End => false,
        }
    }
}

/// A single rewrite rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pattern: &'static [Slot],
    code: &'static str,
    offset: isize,
    increment: usize,
    word_start: bool,
}

impl Rule {
    /// Rule applicable at any cursor position
    pub const fn new(
        pattern: &'static [Slot],
        code: &'static str,
        offset: isize,
        increment: usize,
    ) -> Self {
        Self {
            pattern,
            code,
            offset,
            increment,
            word_start: false,
        }
    }

    /// Rule applicable only while the cursor is on the first character
    pub const fn initial(
        pattern: &'static [Slot],
        code: &'static str,
        offset: isize,
        increment: usize,
    ) -> Self {
        Self {
            pattern,
            code,
            offset,
            increment,
            word_start: true,
        }
    }

    /// Symbols emitted on a match (may be empty)
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Signed anchor displacement relative to the cursor
    pub fn offset(&self) -> isize {
        self.offset
    }

    /// Characters the cursor advances on a match
    pub fn increment(&self) -> usize {
        self.increment
    }

    /// Whether the rule only applies at the start of the word
    pub fn is_word_start(&self) -> bool {
        self.word_start
    }

    /// Test the rule with the cursor at `cursor`.
    ///
    /// Fails without looking at the input when the rule is word-start-only
    /// and the cursor has moved, or when the offset would anchor before the
    /// first character.
    pub fn matches_at(&self, word: &[char], cursor: usize) -> bool {
        if self.word_start && cursor > 0 {
            return false;
        }
        let Some(mut pos) = cursor.checked_add_signed(self.offset) else {
            return false;
        };
        if pos > word.len() {
            return false;
        }

        for slot in self.pattern {
            match (*slot, word.get(pos)) {
                (Slot::End, next) => {
                    if next.is_some() {
                        return false;
                    }
                }
                (Slot::OneOfOrEnd(_), None) => {}
                (slot, Some(&c)) if slot.accepts(c) => pos += 1,
                _ => return false,
            }
        }
        true
    }
}

use Slot::{Any, Consonant, End, Is, OneOf, OneOfOrEnd, Vowel};

/// The rule table, in precedence order
pub static RULES: &[Rule] = &[
    // initial vowels
    Rule::initial(&[Is('a')], "A", 0, 1),
    Rule::initial(&[OneOf("ei")], "I", 0, 1),
    Rule::initial(&[OneOf("ou")], "U", 0, 1),
    Rule::new(&[Is('b')], "B", 0, 1),
    // hard c: c[c-h, a, o, u] or final c
    Rule::new(&[Is('c'), OneOfOrEnd("bcdfgjklmnpqrstvwxzaou")], "K", 0, 1),
    Rule::new(&[Is('c'), Is('h'), Is('r')], "KR", 0, 3),
    Rule::new(&[Is('c'), OneOf("ei")], "S", 0, 1),
    Rule::new(&[Is('d')], "D", 0, 1),
    Rule::new(&[Is('f')], "F", 0, 1),
    Rule::new(&[Is('g'), OneOf("aou")], "G", 0, 1),
    Rule::new(&[Is('g'), Is('h'), OneOf(CONSONANTS_NO_H)], "G", 0, 2),
    Rule::new(&[Is('g'), OneOf("ei")], "J", 0, 1),
    Rule::new(&[Is('g'), Is('h'), OneOf("ei")], "J", 0, 2),
    // initial h + vowel reads as the vowel
    Rule::initial(&[Is('h'), Is('a')], "A", 0, 2),
    Rule::initial(&[Is('h'), OneOf("ei")], "I", 0, 2),
    Rule::initial(&[Is('h'), OneOf("ou")], "U", 0, 2),
    Rule::new(&[Is('l'), Is('h')], "1", 0, 2),
    Rule::new(&[Is('n'), Is('h')], "3", 0, 1),
    Rule::new(&[Is('h')], "", 0, 1),
    Rule::new(&[Is('j')], "J", 0, 1),
    Rule::new(&[Is('k')], "K", 0, 1),
    Rule::new(&[Is('l'), OneOf("aou")], "l", 0, 1),
    Rule::new(&[Is('m')], "M", 0, 1),
    Rule::new(&[Is('n'), End], "M", 0, 1),
    Rule::new(&[Is('p'), Is('h')], "F", 0, 1),
    Rule::new(&[Is('p')], "P", 0, 1),
    Rule::new(&[Is('q')], "K", 0, 1),
    Rule::new(&[Is('q'), Is('u')], "K", 0, 2),
    // strong r at the start, doubled; soft r between vowels and in clusters
    Rule::initial(&[Is('r')], "2", 0, 1),
    Rule::new(&[Is('r'), End], "R", 0, 1),
    Rule::new(&[Is('r'), Is('r')], "2", 0, 2),
    Rule::new(&[OneOf("aou"), Is('r'), Vowel], "R", -1, 1),
    Rule::new(&[Any, Is('r'), Consonant], "R", -1, 1),
    Rule::new(&[Consonant, Is('r'), Vowel], "R", -1, 1),
    Rule::new(&[Is('s'), Is('s')], "S", 0, 2),
    Rule::new(&[OneOf("sc"), Is('h')], "X", 0, 2),
    Rule::new(&[Is('s'), Is('c'), Is('h')], "X", 0, 3),
    Rule::new(&[Is('s'), Is('c'), OneOf("ei")], "S", 0, 1),
    Rule::new(&[Is('s'), Is('c')], "SK", 0, 2),
    Rule::new(&[Is('s'), OneOf(CONSONANTS_NO_H)], "S", 0, 1),
    Rule::new(&[Is('t')], "T", 0, 1),
    Rule::new(&[Is('t'), Is('h')], "T", 0, 2),
    Rule::new(&[Is('v')], "V", 0, 1),
    Rule::new(&[Is('w'), OneOf("lraeiou")], "V", 0, 1),
    Rule::new(&[Is('w'), Consonant], "", 0, 1),
    // x: the sound depends on what came before it
    Rule::new(&[Is('x'), End], "X", 0, 1),
    // word-start-only with a look-behind; can never fire, kept for order
    Rule::initial(&[Is('e'), Is('x'), Vowel], "Z", -1, 1),
    Rule::new(&[Is('e'), Is('x'), OneOf("ei")], "X", -1, 1),
    Rule::new(&[Is('e'), Is('x'), OneOf("ptc")], "S", -1, 1),
    Rule::new(&[Any, Is('e'), Is('x'), OneOf("aou")], "X", -2, 1),
    Rule::new(&[Is('e'), Is('x'), OneOf("aou")], "KS", -1, 1),
    Rule::new(&[Is('e'), Is('x'), Any], "KS", -1, 1),
    Rule::new(&[OneOf("aeiouckglrx"), OneOf("aiou"), Is('x')], "X", -2, 1),
    Rule::new(&[OneOf("dfmnpqstvz"), OneOf("aou"), Is('x')], "KS", -2, 1),
    Rule::new(&[Vowel, Is('i'), Vowel], "I", -1, 1),
    Rule::new(&[Is('y')], "I", 0, 1),
    Rule::new(&[Is('z'), End], "S", 0, 1),
    Rule::new(&[Is('z')], "Z", 0, 1),
    Rule::new(&[Is('x')], "X", 0, 1),
    Rule::new(&[Is('s')], "S", 0, 1),
];

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_literal_is_case_insensitive() {
        let rule = Rule::new(&[Is('c'), OneOf("ei")], "S", 0, 1);
        assert!(rule.matches_at(&chars("CEU"), 0));
        assert!(rule.matches_at(&chars("ceu"), 0));
        assert!(!rule.matches_at(&chars("cau"), 0));
    }

    #[test]
    fn test_end_anchor() {
        let rule = Rule::new(&[Is('r'), End], "R", 0, 1);
        assert!(rule.matches_at(&chars("mar"), 2));
        assert!(!rule.matches_at(&chars("mara"), 2));
    }

    #[test]
    fn test_one_of_or_end() {
        let rule = Rule::new(&[Is('c'), OneOfOrEnd("aou")], "K", 0, 1);
        assert!(rule.matches_at(&chars("ac"), 1));
        assert!(rule.matches_at(&chars("aca"), 1));
        assert!(!rule.matches_at(&chars("ace"), 1));
    }

    #[test]
    fn test_negative_offset_looks_behind() {
        let rule = Rule::new(&[OneOf("aou"), Is('r'), Vowel], "R", -1, 1);
        assert!(rule.matches_at(&chars("caro"), 2));
        assert!(!rule.matches_at(&chars("caro"), 1));
    }

    #[test]
    fn test_offset_before_start_is_skipped() {
        let rule = Rule::new(&[Any, Is('e'), Is('x')], "X", -2, 1);
        assert!(!rule.matches_at(&chars("ex"), 1));
        assert!(rule.matches_at(&chars("aex"), 2));
    }

    #[test]
    fn test_word_start_only() {
        let rule = Rule::initial(&[Is('a')], "A", 0, 1);
        assert!(rule.matches_at(&chars("ana"), 0));
        assert!(!rule.matches_at(&chars("ana"), 2));
    }

    #[test]
    fn test_initial_look_behind_never_fires() {
        let rule = RULES
            .iter()
            .find(|r| r.is_word_start() && r.offset() < 0)
            .copied();
        let rule = rule.expect("table keeps the initial look-behind rule");
        for word in ["exame", "exato", "texugo"] {
            let word = chars(word);
            for cursor in 0..word.len() {
                assert!(!rule.matches_at(&word, cursor));
            }
        }
    }

    #[test]
    fn test_table_shape() {
        assert!(!RULES.is_empty());
        for rule in RULES {
            assert!(rule.increment() > 0);
            assert!(rule.offset() <= 0);
        }
    }
}
