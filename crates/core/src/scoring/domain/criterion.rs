use serde::Serialize;

/// The nine rubric dimensions, in report order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CriterionKind {
    Salutation,
    MustHave,
    GoodToHave,
    Flow,
    SpeechRate,
    Grammar,
    Ttr,
    Clarity,
    Engagement,
}

impl CriterionKind {
    pub const ALL: [CriterionKind; 9] = [
        CriterionKind::Salutation,
        CriterionKind::MustHave,
        CriterionKind::GoodToHave,
        CriterionKind::Flow,
        CriterionKind::SpeechRate,
        CriterionKind::Grammar,
        CriterionKind::Ttr,
        CriterionKind::Clarity,
        CriterionKind::Engagement,
    ];

    /// Key used for the criterion in serialised reports.
    pub fn key(&self) -> &'static str {
        match self {
            CriterionKind::Salutation => "salutation",
            CriterionKind::MustHave => "must_have",
            CriterionKind::GoodToHave => "good_to_have",
            CriterionKind::Flow => "flow",
            CriterionKind::SpeechRate => "speech_rate",
            CriterionKind::Grammar => "grammar",
            CriterionKind::Ttr => "ttr",
            CriterionKind::Clarity => "clarity",
            CriterionKind::Engagement => "engagement",
        }
    }

    pub fn max_points(&self) -> u32 {
        match self {
            CriterionKind::Salutation => 5,
            CriterionKind::MustHave => 20,
            CriterionKind::GoodToHave => 10,
            CriterionKind::Flow => 5,
            CriterionKind::SpeechRate => 10,
            CriterionKind::Grammar => 10,
            CriterionKind::Ttr => 10,
            CriterionKind::Clarity => 15,
            CriterionKind::Engagement => 15,
        }
    }
}

impl std::fmt::Display for CriterionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CriterionKind::Salutation => write!(f, "Salutation"),
            CriterionKind::MustHave => write!(f, "Must-have content"),
            CriterionKind::GoodToHave => write!(f, "Good-to-have content"),
            CriterionKind::Flow => write!(f, "Flow"),
            CriterionKind::SpeechRate => write!(f, "Speech rate"),
            CriterionKind::Grammar => write!(f, "Grammar"),
            CriterionKind::Ttr => write!(f, "Vocabulary richness"),
            CriterionKind::Clarity => write!(f, "Clarity"),
            CriterionKind::Engagement => write!(f, "Engagement"),
        }
    }
}

/// Highest achievable overall score.
pub fn max_total_points() -> u32 {
    CriterionKind::ALL.iter().map(|c| c.max_points()).sum()
}
