use serde::Serialize;

use super::clarity_scorer::ClarityResult;
use super::content_scorer::ContentResult;
use super::criterion::CriterionKind;
use super::engagement_scorer::EngagementResult;
use super::flow_scorer::FlowResult;
use super::grammar_scorer::GrammarResult;
use super::lexical_diversity_scorer::LexicalDiversityResult;
use super::salutation_scorer::SalutationResult;
use super::speech_rate_scorer::SpeechRateResult;

/// Per-criterion results, serialised under each criterion's key.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Criteria {
    pub salutation: SalutationResult,
    pub must_have: ContentResult,
    pub good_to_have: ContentResult,
    pub flow: FlowResult,
    pub speech_rate: SpeechRateResult,
    pub grammar: GrammarResult,
    pub ttr: LexicalDiversityResult,
    pub clarity: ClarityResult,
    pub engagement: EngagementResult,
}

impl Criteria {
    pub fn points(&self, kind: CriterionKind) -> u32 {
        match kind {
            CriterionKind::Salutation => self.salutation.points,
            CriterionKind::MustHave => self.must_have.points,
            CriterionKind::GoodToHave => self.good_to_have.points,
            CriterionKind::Flow => self.flow.points,
            CriterionKind::SpeechRate => self.speech_rate.points,
            CriterionKind::Grammar => self.grammar.points,
            CriterionKind::Ttr => self.ttr.points,
            CriterionKind::Clarity => self.clarity.points,
            CriterionKind::Engagement => self.engagement.points,
        }
    }

    /// Short human-readable explanation of the criterion's outcome.
    pub fn summary(&self, kind: CriterionKind) -> String {
        match kind {
            CriterionKind::Salutation => self.salutation.detail.clone(),
            CriterionKind::MustHave => found_summary(&self.must_have.found),
            CriterionKind::GoodToHave => found_summary(&self.good_to_have.found),
            CriterionKind::Flow => self.flow.detail.clone(),
            CriterionKind::SpeechRate => format!("{} wpm", self.speech_rate.detail),
            CriterionKind::Grammar => format!(
                "{} issue(s), quality {:.2}",
                self.grammar.errors, self.grammar.raw
            ),
            CriterionKind::Ttr => format!("type-token ratio {:.2}", self.ttr.value),
            CriterionKind::Clarity => format!(
                "{} filler(s), {:.1}% of words",
                self.clarity.count, self.clarity.rate
            ),
            CriterionKind::Engagement => format!("positivity {:.2}", self.engagement.sentiment),
        }
    }

    pub fn total(&self) -> u32 {
        CriterionKind::ALL.iter().map(|k| self.points(*k)).sum()
    }
}

fn found_summary(found: &[String]) -> String {
    if found.is_empty() {
        "none found".to_string()
    } else {
        found.join(", ")
    }
}

/// Result of one scoring call.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ScoreReport {
    pub overall_score: u32,
    pub word_count: usize,
    /// Words per minute rounded to two decimals.
    pub wpm: f64,
    pub criteria: Criteria,
}

impl ScoreReport {
    /// Builds the report; the overall score is always the sum of the criteria.
    pub fn new(word_count: usize, wpm: f64, criteria: Criteria) -> Self {
        Self {
            overall_score: criteria.total(),
            word_count,
            wpm: round_to(wpm, 2),
            criteria,
        }
    }

    pub fn criterion_points(&self) -> Vec<(CriterionKind, u32)> {
        CriterionKind::ALL
            .iter()
            .map(|k| (*k, self.criteria.points(*k)))
            .collect()
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
