use std::thread;

use crate::language::domain::grammar_checker::GrammarChecker;
use crate::language::domain::sentiment_scorer::SentimentScorer;
use crate::pipeline::scoring_error::ScoringError;
use crate::scoring::domain::clarity_scorer::score_clarity;
use crate::scoring::domain::content_scorer::{score_good_to_have, score_must_have};
use crate::scoring::domain::criterion::CriterionKind;
use crate::scoring::domain::engagement_scorer::score_engagement;
use crate::scoring::domain::flow_scorer::score_flow;
use crate::scoring::domain::grammar_scorer::score_grammar;
use crate::scoring::domain::lexical_diversity_scorer::score_lexical_diversity;
use crate::scoring::domain::salutation_scorer::score_salutation;
use crate::scoring::domain::score_report::{Criteria, ScoreReport};
use crate::scoring::domain::speech_rate_scorer::{score_speech_rate, words_per_minute};
use crate::shared::rubric::{Rubric, STANDARD_RUBRIC};
use crate::shared::transcript::Transcript;
use crate::text::domain::token_sequence::TokenSequence;
use crate::text::domain::tokenizer::Tokenizer;

/// Grammar issue count and positivity for one transcript.
struct ExternalSignals {
    grammar_issues: usize,
    positivity: f64,
}

/// Scores a transcript against the rubric.
///
/// Holds no per-call state, so one instance can serve concurrent calls as
/// long as the injected collaborators are themselves thread-safe.
pub struct ScoreTranscriptUseCase {
    tokenizer: Box<dyn Tokenizer>,
    grammar: Box<dyn GrammarChecker>,
    sentiment: Box<dyn SentimentScorer>,
    rubric: Rubric,
}

impl ScoreTranscriptUseCase {
    pub fn new(
        tokenizer: Box<dyn Tokenizer>,
        grammar: Box<dyn GrammarChecker>,
        sentiment: Box<dyn SentimentScorer>,
    ) -> Self {
        Self {
            tokenizer,
            grammar,
            sentiment,
            rubric: STANDARD_RUBRIC,
        }
    }

    pub fn with_rubric(mut self, rubric: Rubric) -> Self {
        self.rubric = rubric;
        self
    }

    /// Scores `transcript` spoken over `duration_seconds`.
    pub fn score(&self, transcript: &str, duration_seconds: f64) -> Result<ScoreReport, ScoringError> {
        let transcript = Transcript::new(transcript, duration_seconds)?;
        self.execute(&transcript)
    }

    pub fn execute(&self, transcript: &Transcript) -> Result<ScoreReport, ScoringError> {
        let lowered = transcript.lowered();
        let duration = transcript.duration_seconds();
        let tokens = TokenSequence::from_text(self.tokenizer.as_ref(), lowered);
        let word_count = tokens.len();

        if word_count == 0 {
            log::warn!("Transcript produced no tokens; word-based criteria use their floors");
        }
        if duration <= 0.0 {
            log::warn!("Non-positive duration {duration}s; speech rate floored at 0 wpm");
        }

        let signals = self.external_signals(transcript.text())?;
        let wpm = words_per_minute(word_count, duration);
        let rubric = &self.rubric;

        let criteria = Criteria {
            salutation: score_salutation(lowered, &rubric.salutations),
            must_have: score_must_have(lowered, rubric.must_have),
            good_to_have: score_good_to_have(lowered, rubric.good_to_have),
            flow: score_flow(lowered, rubric.flow_anchors),
            speech_rate: score_speech_rate(wpm),
            grammar: score_grammar(signals.grammar_issues, word_count),
            ttr: score_lexical_diversity(&tokens),
            clarity: score_clarity(&tokens, rubric.single_fillers, rubric.multi_word_fillers),
            engagement: score_engagement(signals.positivity),
        };

        for kind in CriterionKind::ALL {
            log::debug!(
                "{kind}: {}/{} ({})",
                criteria.points(kind),
                kind.max_points(),
                criteria.summary(kind)
            );
        }

        let report = ScoreReport::new(word_count, wpm, criteria);
        log::info!(
            "Scored {word_count} words at {:.1} wpm: {}/100",
            report.wpm,
            report.overall_score
        );
        Ok(report)
    }

    /// Runs the grammar and sentiment collaborators concurrently.
    ///
    /// Both calls always complete; a grammar failure is reported ahead of a
    /// sentiment failure.
    fn external_signals(&self, text: &str) -> Result<ExternalSignals, ScoringError> {
        let grammar = self.grammar.as_ref();
        let sentiment = self.sentiment.as_ref();

        let (grammar_result, sentiment_result) = thread::scope(|scope| {
            let grammar_handle = scope.spawn(move || grammar.check(text));
            let sentiment_result = sentiment.positivity(text);
            (grammar_handle.join(), sentiment_result)
        });

        let grammar_issues = grammar_result
            .unwrap_or_else(|panic| std::panic::resume_unwind(panic))
            .map_err(|source| ScoringError::GrammarService { source })?;
        let positivity =
            sentiment_result.map_err(|source| ScoringError::SentimentService { source })?;
        if !positivity.is_finite() {
            return Err(ScoringError::SentimentService {
                source: format!("non-finite positivity {positivity}").into(),
            });
        }

        Ok(ExternalSignals {
            grammar_issues,
            positivity: positivity.clamp(0.0, 1.0),
        })
    }
}
