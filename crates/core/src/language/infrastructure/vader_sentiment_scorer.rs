use vader_sentiment::SentimentIntensityAnalyzer;

use crate::language::domain::grammar_checker::CollaboratorError;
use crate::language::domain::sentiment_scorer::SentimentScorer;

/// Offline positivity scorer backed by the VADER lexicon and rules.
///
/// Positivity is VADER's `pos` share: the proportion of the text carrying
/// positive sentiment, in `[0, 1]`.
pub struct VaderSentimentScorer {
    analyzer: SentimentIntensityAnalyzer<'static>,
}

impl VaderSentimentScorer {
    pub fn new() -> Self {
        Self {
            analyzer: SentimentIntensityAnalyzer::new(),
        }
    }
}

impl Default for VaderSentimentScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentScorer for VaderSentimentScorer {
    fn positivity(&self, text: &str) -> Result<f64, CollaboratorError> {
        let scores = self.analyzer.polarity_scores(text);
        let pos = scores
            .get("pos")
            .copied()
            .ok_or("VADER returned no 'pos' score")?;
        Ok(pos)
    }
}
