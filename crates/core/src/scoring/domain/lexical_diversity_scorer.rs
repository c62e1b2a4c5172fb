use std::ops::Bound::{Excluded, Included, Unbounded};

use serde::Serialize;

use crate::shared::band::{Band, BandTable};
use crate::shared::constants::EMPTY_TTR_POINTS;
use crate::shared::ratio::safe_divide;
use crate::text::domain::token_sequence::TokenSequence;

/// Type-token ratio bands (higher is better).
pub static TTR_BANDS: BandTable = BandTable::new(&[
    Band::new(Included(0.9), Unbounded, 10, "Very rich"),
    Band::new(Included(0.7), Excluded(0.9), 8, "Rich"),
    Band::new(Included(0.5), Excluded(0.7), 6, "Moderate"),
    Band::new(Included(0.3), Excluded(0.5), 4, "Repetitive"),
    Band::new(Unbounded, Excluded(0.3), 2, "Very repetitive"),
]);

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LexicalDiversityResult {
    pub points: u32,
    pub value: f64,
}

/// Distinct tokens over total tokens; 0.0 for an empty sequence.
pub fn type_token_ratio(tokens: &TokenSequence) -> f64 {
    safe_divide(tokens.distinct_count() as f64, tokens.len() as f64)
}

pub fn score_lexical_diversity(tokens: &TokenSequence) -> LexicalDiversityResult {
    if tokens.is_empty() {
        return LexicalDiversityResult {
            points: EMPTY_TTR_POINTS,
            value: 0.0,
        };
    }
    let value = type_token_ratio(tokens);
    LexicalDiversityResult {
        points: TTR_BANDS.classify(value).points,
        value,
    }
}
