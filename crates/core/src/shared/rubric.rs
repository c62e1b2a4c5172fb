//! Fixed phrase tables of the self-introduction rubric.
//!
//! Every phrase is lowercase and matched as a substring of the lowercased
//! transcript, except the filler words which are matched against tokens.

/// A named group of trigger phrases. Any one phrase satisfies the category.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PhraseCategory {
    pub name: &'static str,
    pub phrases: &'static [&'static str],
}

impl PhraseCategory {
    pub const fn new(name: &'static str, phrases: &'static [&'static str]) -> Self {
        Self { name, phrases }
    }

    /// True when any trigger phrase occurs in `lowered_text`.
    pub fn matches(&self, lowered_text: &str) -> bool {
        self.phrases.iter().any(|p| lowered_text.contains(p))
    }
}

/// Opening-phrase tiers, highest first.
#[derive(Clone, Copy, Debug)]
pub struct SalutationTiers {
    pub excellent: PhraseCategory,
    pub good: PhraseCategory,
    pub normal: PhraseCategory,
}

/// The complete set of phrase tables consulted by the scorers.
#[derive(Clone, Copy, Debug)]
pub struct Rubric {
    pub salutations: SalutationTiers,
    pub must_have: &'static [PhraseCategory],
    pub good_to_have: &'static [PhraseCategory],
    /// Anchors in the canonical order of a self-introduction.
    pub flow_anchors: &'static [&'static str],
    pub single_fillers: &'static [&'static str],
    pub multi_word_fillers: &'static [&'static [&'static str]],
}

pub const SALUTATIONS: SalutationTiers = SalutationTiers {
    excellent: PhraseCategory::new("excellent", &["excited to introduce", "feeling great"]),
    good: PhraseCategory::new(
        "good",
        &["good morning", "good afternoon", "good evening", "hello everyone"],
    ),
    normal: PhraseCategory::new("normal", &["hello", "hi"]),
};

pub const MUST_HAVE: &[PhraseCategory] = &[
    PhraseCategory::new("name", &["my name is", "i am", "myself"]),
    PhraseCategory::new("age", &["years old", "i am"]),
    PhraseCategory::new("class_school", &["class", "school"]),
    PhraseCategory::new("family", &["family", "mother", "father", "parents"]),
    PhraseCategory::new(
        "hobbies",
        &["hobby", "hobbies", "i like", "i enjoy", "playing"],
    ),
];

pub const GOOD_TO_HAVE: &[PhraseCategory] = &[
    PhraseCategory::new("about_family", &["about my family"]),
    PhraseCategory::new("origin", &["i am from"]),
    PhraseCategory::new("goal", &["goal", "dream", "ambition"]),
    PhraseCategory::new("fun_fact", &["fun fact", "something unique"]),
    PhraseCategory::new("strengths", &["strength", "achievement", "achievements"]),
];

pub const FLOW_ANCHORS: &[&str] = &[
    "hello", "my name", "i am", "class", "school", "family", "hobby", "thank",
];

pub const SINGLE_FILLERS: &[&str] = &[
    "um", "uh", "like", "so", "actually", "basically", "right", "well", "kinda", "okay", "hmm",
    "ah",
];

/// Fillers spanning several tokens, matched as consecutive token windows.
pub const MULTI_WORD_FILLERS: &[&[&str]] = &[&["you", "know"], &["i", "mean"], &["sort", "of"]];

pub const STANDARD_RUBRIC: Rubric = Rubric {
    salutations: SALUTATIONS,
    must_have: MUST_HAVE,
    good_to_have: GOOD_TO_HAVE,
    flow_anchors: FLOW_ANCHORS,
    single_fillers: SINGLE_FILLERS,
    multi_word_fillers: MULTI_WORD_FILLERS,
};

impl Default for Rubric {
    fn default() -> Self {
        STANDARD_RUBRIC
    }
}
