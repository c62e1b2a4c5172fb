//! Rubric scoring for spoken self-introductions.
//!
//! The entry point is [`pipeline::score_transcript_use_case::ScoreTranscriptUseCase`],
//! which takes a transcript and its duration and produces a
//! [`scoring::domain::score_report::ScoreReport`]. Tokenization, grammar
//! checking, sentiment and transcription are injected collaborators.

pub mod audio {
    pub mod domain {
        pub mod speech_transcriber;
        pub mod transcription;
    }
    pub mod infrastructure;
}

pub mod language {
    pub mod domain {
        pub mod grammar_checker;
        pub mod sentiment_scorer;
    }
    pub mod infrastructure;
}

pub mod pipeline {
    pub mod score_audio_use_case;
    pub mod score_transcript_use_case;
    pub mod scoring_error;
}

pub mod scoring {
    pub mod domain {
        pub mod clarity_scorer;
        pub mod content_scorer;
        pub mod criterion;
        pub mod engagement_scorer;
        pub mod flow_scorer;
        pub mod grammar_scorer;
        pub mod keyword_matcher;
        pub mod lexical_diversity_scorer;
        pub mod salutation_scorer;
        pub mod score_report;
        pub mod speech_rate_scorer;
    }
}

pub mod shared {
    pub mod band;
    pub mod constants;
    pub mod model_resolver;
    pub mod ratio;
    pub mod rubric;
    pub mod transcript;
}

pub mod text {
    pub mod domain {
        pub mod token_sequence;
        pub mod tokenizer;
    }
    pub mod infrastructure;
}
