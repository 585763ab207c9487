//! metaphone-br
//!
//! Phonetic codes for Brazilian Portuguese names and fuzzy comparison of
//! multi-word names built on them. Two spellings that sound alike get the
//! same (or a close) code; names are then aligned word by word, skipping
//! prepositions, and scored by spelling similarity.
//!
//! All state is local to each call apart from the constant rule table, so
//! every function is safe to call from any number of threads.
//!
//! # Example
//!
//! ```rust
//! use metaphone_br::{pack, parse, is_metaphone_similar, similarity_between_words};
//!
//! assert_eq!(pack("testando"), "TSTD");
//! assert!(is_metaphone_similar(&pack("mundo"), &pack("mundi")));
//! assert!((similarity_between_words("mundo", "mundi") - 0.8).abs() < 1e-9);
//!
//! let subject = parse("Maria da Silva").unwrap();
//! let score = subject.sim_str("Maria Silva").unwrap();
//! assert!(score > 0.99);
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod matcher;
pub mod name;
pub mod normalize;
pub mod phonetic;
pub mod similarity;

// Re-export main types at crate root
pub use config::{MatchConfig, PREPOSITIONS};
pub use error::{NameError, NameResult, INVALID_SCORE};
pub use logging::init_logging;
pub use matcher::{Alignment, NameMatcher, WordMatch};
pub use name::{parse, ParsedName};
pub use normalize::fold_accents;
pub use phonetic::pack;
pub use similarity::{
    is_metaphone_similar, is_metaphone_similar_with, similarity_between_words, LEV_THRESHOLD,
    MAX_SIMILARITY,
};
