use crate::lexicon::{INTENSIFIERS, NEGATION_FACTOR, NEGATORS, VALENCES};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use thiserror::Error;

static VALENCE_INDEX: Lazy<HashMap<&'static str, f32>> =
    Lazy::new(|| VALENCES.iter().copied().collect());

static INTENSITY_INDEX: Lazy<HashMap<&'static str, f32>> =
    Lazy::new(|| INTENSIFIERS.iter().copied().collect());

/// Lowercased word runs, apostrophes kept so contractions survive.
const TOKEN_PATTERN: &str = r"[a-z']+";

#[derive(Debug, Error)]
pub enum SentimentError {
    #[error("invalid token pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Polarity scorer over the static lexicon.
///
/// [`SentimentAnalyzer::score`] returns the mean valence of recognized
/// words, clamped to `[-1.0, 1.0]`. Text with no recognized words scores
/// exactly `0.0`.
pub struct SentimentAnalyzer {
    tokens: Regex,
}

impl SentimentAnalyzer {
    pub fn new() -> Result<Self, SentimentError> {
        Ok(Self {
            tokens: Regex::new(TOKEN_PATTERN)?,
        })
    }

    #[must_use]
    pub fn score(&self, text: &str) -> f32 {
        let lowered = text.to_lowercase();
        let tokens: Vec<&str> = self
            .tokens
            .find_iter(&lowered)
            .map(|m| m.as_str().trim_matches('\''))
            .filter(|token| !token.is_empty())
            .collect();

        let mut total = 0.0_f32;
        let mut hits = 0_usize;

        for (i, token) in tokens.iter().enumerate() {
            let Some(&valence) = VALENCE_INDEX.get(token) else {
                continue;
            };

            let mut adjusted = valence;
            if i > 0 {
                if let Some(&scale) = INTENSITY_INDEX.get(tokens[i - 1]) {
                    adjusted *= scale;
                }
            }
            if Self::negated(&tokens, i) {
                adjusted *= NEGATION_FACTOR;
            }

            total += adjusted.clamp(-1.0, 1.0);
            hits += 1;
        }

        if hits == 0 {
            return 0.0;
        }

        #[allow(clippy::cast_precision_loss)]
        let mean = total / hits as f32;
        mean.clamp(-1.0, 1.0)
    }

    /// A negator flips the word right after it, reaching across a single
    /// intensifier so "not very good" still reads negated.
    fn negated(tokens: &[&str], index: usize) -> bool {
        if index == 0 {
            return false;
        }
        let prev = tokens[index - 1];
        if NEGATORS.contains(&prev) {
            return true;
        }
        index >= 2 && INTENSITY_INDEX.contains_key(prev) && NEGATORS.contains(&tokens[index - 2])
    }
}
