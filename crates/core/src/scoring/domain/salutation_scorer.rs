use serde::Serialize;

use crate::shared::rubric::SalutationTiers;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SalutationLevel {
    Excellent,
    Good,
    Normal,
    Missing,
}

impl SalutationLevel {
    pub fn points(&self) -> u32 {
        match self {
            SalutationLevel::Excellent => 5,
            SalutationLevel::Good => 4,
            SalutationLevel::Normal => 2,
            SalutationLevel::Missing => 0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SalutationLevel::Excellent => "Excellent",
            SalutationLevel::Good => "Good",
            SalutationLevel::Normal => "Normal",
            SalutationLevel::Missing => "No salutation",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SalutationResult {
    pub points: u32,
    pub detail: String,
}

/// Highest tier with a phrase in `lowered_text`. Tiers are checked
/// excellent, good, normal; the first hit wins.
pub fn classify_salutation(lowered_text: &str, tiers: &SalutationTiers) -> SalutationLevel {
    if tiers.excellent.matches(lowered_text) {
        SalutationLevel::Excellent
    } else if tiers.good.matches(lowered_text) {
        SalutationLevel::Good
    } else if tiers.normal.matches(lowered_text) {
        SalutationLevel::Normal
    } else {
        SalutationLevel::Missing
    }
}

pub fn score_salutation(lowered_text: &str, tiers: &SalutationTiers) -> SalutationResult {
    let level = classify_salutation(lowered_text, tiers);
    SalutationResult {
        points: level.points(),
        detail: level.label().to_string(),
    }
}
