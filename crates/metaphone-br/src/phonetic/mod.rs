//! Phonetic Encoding
//!
//! A metaphone variant for Brazilian Portuguese. A word is scanned left to
//! right with a cursor; at each position the first matching rule of
//! [`RULES`] emits its symbol and moves the cursor.
//!
//! Most symbols are uppercase letters. A few are digits or lowercase and
//! stand for sounds with no single-letter spelling:
//!
//! - `1` - `lh`
//! - `2` - strong `r` (initial or doubled)
//! - `3` - `nh`
//! - `l` - `l` before `a`, `o`, `u`
//!
//! # Example
//!
//! ```rust
//! use metaphone_br::phonetic::pack;
//!
//! assert_eq!(pack("mundo"), "MD");
//! assert_eq!(pack("olá"), "Ul");
//! ```

mod engine;
mod rules;

pub use engine::pack;
pub use rules::{Rule, Slot, CONSONANTS, RULES, VOWELS};
