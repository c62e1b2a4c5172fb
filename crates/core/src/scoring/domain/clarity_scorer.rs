use std::ops::Bound::{Excluded, Included, Unbounded};

use serde::Serialize;

use crate::shared::band::{Band, BandTable};
use crate::shared::ratio::per_hundred;
use crate::text::domain::token_sequence::TokenSequence;

/// Filler-rate bands (percent of tokens, lower is better).
pub static CLARITY_BANDS: BandTable = BandTable::new(&[
    Band::new(Unbounded, Included(3.0), 15, "Very clear"),
    Band::new(Excluded(3.0), Included(6.0), 12, "Clear"),
    Band::new(Excluded(6.0), Included(9.0), 9, "Some fillers"),
    Band::new(Excluded(9.0), Included(12.0), 6, "Many fillers"),
    Band::new(Excluded(12.0), Unbounded, 3, "Filler heavy"),
]);

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ClarityResult {
    pub points: u32,
    pub rate: f64,
    pub count: usize,
}

/// Single-word fillers by token membership, plus each occurrence of a
/// multi-word filler as consecutive tokens.
pub fn count_fillers(
    tokens: &TokenSequence,
    single_fillers: &[&str],
    multi_word_fillers: &[&[&str]],
) -> usize {
    let single = tokens.count_members(single_fillers);
    let multi: usize = multi_word_fillers
        .iter()
        .map(|phrase| tokens.count_phrase(phrase))
        .sum();
    single + multi
}

pub fn score_clarity(
    tokens: &TokenSequence,
    single_fillers: &[&str],
    multi_word_fillers: &[&[&str]],
) -> ClarityResult {
    let count = count_fillers(tokens, single_fillers, multi_word_fillers);
    let rate = per_hundred(count, tokens.len());
    ClarityResult {
        points: CLARITY_BANDS.classify(rate).points,
        rate,
        count,
    }
}
