use std::fs;

use intro_scorer_core::audio::infrastructure::whisper_json_transcriber::WhisperJsonTranscriber;
use intro_scorer_core::language::domain::grammar_checker::{CollaboratorError, GrammarChecker};
use intro_scorer_core::language::infrastructure::vader_sentiment_scorer::VaderSentimentScorer;
use intro_scorer_core::pipeline::score_audio_use_case::ScoreAudioUseCase;
use intro_scorer_core::pipeline::score_transcript_use_case::ScoreTranscriptUseCase;
use intro_scorer_core::scoring::domain::criterion::CriterionKind;
use intro_scorer_core::text::infrastructure::word_tokenizer::WordTokenizer;

/// Reports one issue per occurrence of "i has".
struct PhraseGrammarChecker;

impl GrammarChecker for PhraseGrammarChecker {
    fn check(&self, text: &str) -> Result<usize, CollaboratorError> {
        Ok(text.to_lowercase().matches("i has").count())
    }
}

fn scorer() -> ScoreTranscriptUseCase {
    ScoreTranscriptUseCase::new(
        Box::new(WordTokenizer::new().unwrap()),
        Box::new(PhraseGrammarChecker),
        Box::new(VaderSentimentScorer::new()),
    )
}

const TRANSCRIPTS: &[&str] = &[
    "Hello everyone, I'm excited to introduce myself. My name is Meera and I am 13 years old. \
     I study in class 8 at Sunrise School. About my family, I live with my mother, father and little brother. \
     My hobby is playing the guitar and I enjoy reading. I am from Jaipur. My dream is to \
     become an astronaut. A fun fact about me is that I can solve a cube in a minute. \
     My greatest strength is patience. Thank you for listening.",
    "um hi so like my name is uh kabir and um i like cricket you know",
    "I has a dog. I has a cat. I has a fish.",
    "thank you",
    "...",
];

#[test]
fn test_reports_respect_bounds_for_all_transcripts() {
    let scorer = scorer();
    for (i, text) in TRANSCRIPTS.iter().enumerate() {
        for duration in [-1.0, 0.0, 10.0, 45.0, 60.0, 600.0] {
            let report = scorer.score(text, duration).unwrap();
            let summed: u32 = report.criterion_points().iter().map(|(_, p)| p).sum();
            assert_eq!(report.overall_score, summed, "transcript {i}");
            assert!(report.overall_score <= 100, "transcript {i}");
            for (kind, points) in report.criterion_points() {
                assert!(
                    points <= kind.max_points(),
                    "transcript {i}: {kind} scored {points}"
                );
            }
        }
    }
}

#[test]
fn test_complete_introduction_scores_high() {
    let report = scorer().score(TRANSCRIPTS[0], 40.0).unwrap();
    let c = &report.criteria;
    assert_eq!(c.salutation.points, 5);
    assert_eq!(c.must_have.points, 20);
    assert_eq!(c.good_to_have.points, 10);
    assert_eq!(c.flow.points, 5);
    assert_eq!(c.grammar.points, 10);
    assert!(report.overall_score >= 70, "got {}", report.overall_score);
}

#[test]
fn test_filler_heavy_speech_loses_clarity() {
    let report = scorer().score(TRANSCRIPTS[1], 10.0).unwrap();
    assert_eq!(report.criteria.salutation.points, 2);
    assert!(report.criteria.clarity.count >= 6);
    assert_eq!(report.criteria.clarity.points, 3);
}

#[test]
fn test_grammar_issues_reduce_points() {
    let report = scorer().score(TRANSCRIPTS[2], 10.0).unwrap();
    assert_eq!(report.criteria.grammar.errors, 3);
    assert_eq!(report.criteria.grammar.points, 2);
}

#[test]
fn test_scoring_is_deterministic() {
    let scorer = scorer();
    for text in TRANSCRIPTS {
        assert_eq!(
            scorer.score(text, 30.0).unwrap(),
            scorer.score(text, 30.0).unwrap()
        );
    }
}

#[test]
fn test_report_json_has_every_criterion() {
    let report = scorer().score(TRANSCRIPTS[0], 60.0).unwrap();
    let json = serde_json::to_value(&report).unwrap();
    for kind in CriterionKind::ALL {
        assert!(
            json["criteria"][kind.key()]["points"].is_u64(),
            "missing {}",
            kind.key()
        );
    }
}

#[test]
fn test_audio_scoring_from_whisper_json() {
    let dir = tempfile::tempdir().unwrap();
    let audio = dir.path().join("meera.m4a");
    fs::write(
        dir.path().join("meera.json"),
        r#"{"text": " Good morning, my name is Meera. Thank you.",
            "segments": [{"start": 0.0, "end": 4.0, "text": " Good morning, my name is Meera. Thank you."}]}"#,
    )
    .unwrap();

    let uc = ScoreAudioUseCase::new(Box::new(WhisperJsonTranscriber::new("base")), scorer());
    let report = uc.execute(&audio, None).unwrap();

    assert_eq!(report.filename, "meera.m4a");
    assert_eq!(report.duration_sec_used, 4.0);
    assert_eq!(report.score.word_count, 8);
    assert_eq!(report.score.criteria.salutation.points, 4);
}
