use crate::shared::rubric::PhraseCategory;

/// Categories satisfied by a transcript, in table order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeywordMatch {
    pub names: Vec<String>,
}

impl KeywordMatch {
    pub fn count(&self) -> usize {
        self.names.len()
    }
}

/// Finds every category with at least one trigger phrase in `lowered_text`.
///
/// There is no partial credit: one phrase fully satisfies its category, and
/// further phrases from the same category add nothing.
pub fn match_categories(lowered_text: &str, categories: &[PhraseCategory]) -> KeywordMatch {
    KeywordMatch {
        names: categories
            .iter()
            .filter(|c| c.matches(lowered_text))
            .map(|c| c.name.to_string())
            .collect(),
    }
}
