//! Matcher configuration
//!
//! Defaults match the standard encoding. [`MatchConfig::from_env`]
//! overlays environment variables:
//!
//! - `METAPHONE_BR_LEV_THRESHOLD`: code tolerance 0.0-1.0 (default: 0.5)
//! - `METAPHONE_BR_PREPOSITIONS`: comma-separated connector words
//!   (default: `DE,DO,DA,DOS,DAS`)

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::similarity::LEV_THRESHOLD;

/// Connector words skipped when aligning names
pub const PREPOSITIONS: [&str; 5] = ["DE", "DO", "DA", "DOS", "DAS"];

const ENV_LEV_THRESHOLD: &str = "METAPHONE_BR_LEV_THRESHOLD";
const ENV_PREPOSITIONS: &str = "METAPHONE_BR_PREPOSITIONS";

/// Name matcher configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Fraction of code length tolerated as edits between phonetic codes
    pub lev_threshold: f64,
    /// Uppercase words excluded from alignment but counted in the score
    pub prepositions: Vec<String>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            lev_threshold: LEV_THRESHOLD,
            prepositions: PREPOSITIONS.iter().map(|p| p.to_string()).collect(),
        }
    }
}

impl MatchConfig {
    /// Defaults overridden by any valid environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_LEV_THRESHOLD) {
            match raw.trim().parse::<f64>() {
                Ok(t) if (0.0..=1.0).contains(&t) => config.lev_threshold = t,
                _ => warn!(value = %raw, "ignoring invalid {}", ENV_LEV_THRESHOLD),
            }
        }

        if let Some(raw) = lookup(ENV_PREPOSITIONS) {
            config.prepositions = raw
                .split(',')
                .map(|p| p.trim().to_uppercase())
                .filter(|p| !p.is_empty())
                .collect();
        }

        debug!(
            lev_threshold = config.lev_threshold,
            prepositions = ?config.prepositions,
            "loaded match configuration"
        );
        config
    }

    /// Whether `word` (already uppercase) is a preposition
    pub fn is_preposition(&self, word: &str) -> bool {
        self.prepositions.iter().any(|p| p == word)
    }
}
