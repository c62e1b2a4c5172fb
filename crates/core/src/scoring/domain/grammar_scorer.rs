use std::ops::Bound::{Excluded, Included, Unbounded};

use serde::Serialize;

use crate::shared::band::{Band, BandTable};
use crate::shared::constants::GRAMMAR_ERROR_CEILING_PER_100;
use crate::shared::ratio::per_hundred;

/// Grammar quality bands (quality in `[0, 1]`, higher is better).
pub static GRAMMAR_BANDS: BandTable = BandTable::new(&[
    Band::new(Excluded(0.9), Unbounded, 10, "Excellent"),
    Band::new(Included(0.7), Included(0.9), 8, "Good"),
    Band::new(Included(0.5), Excluded(0.7), 6, "Fair"),
    Band::new(Included(0.3), Excluded(0.5), 4, "Weak"),
    Band::new(Unbounded, Excluded(0.3), 2, "Poor"),
]);

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GrammarResult {
    pub points: u32,
    pub errors: usize,
    pub raw: f64,
}

/// Quality in `[0, 1]`: one minus the error rate per 100 words relative to
/// [`GRAMMAR_ERROR_CEILING_PER_100`]. Word count is floored at 1.
pub fn grammar_quality(issue_count: usize, word_count: usize) -> f64 {
    let errors_per_100 = per_hundred(issue_count, word_count);
    (1.0 - (errors_per_100 / GRAMMAR_ERROR_CEILING_PER_100).min(1.0)).clamp(0.0, 1.0)
}

pub fn score_grammar(issue_count: usize, word_count: usize) -> GrammarResult {
    let raw = grammar_quality(issue_count, word_count);
    GrammarResult {
        points: GRAMMAR_BANDS.classify(raw).points,
        errors: issue_count,
        raw,
    }
}
