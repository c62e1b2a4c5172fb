mod settings;

use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};

use intro_scorer_core::audio::domain::speech_transcriber::SpeechTranscriber;
use intro_scorer_core::audio::infrastructure::whisper_json_transcriber::WhisperJsonTranscriber;
#[cfg(feature = "whisper")]
use intro_scorer_core::audio::infrastructure::whisper_transcriber::WhisperTranscriber;
use intro_scorer_core::language::infrastructure::language_tool_checker::LanguageToolChecker;
use intro_scorer_core::language::infrastructure::vader_sentiment_scorer::VaderSentimentScorer;
use intro_scorer_core::pipeline::score_audio_use_case::ScoreAudioUseCase;
use intro_scorer_core::pipeline::score_transcript_use_case::ScoreTranscriptUseCase;
use intro_scorer_core::pipeline::scoring_error::ScoringError;
use intro_scorer_core::scoring::domain::criterion::{max_total_points, CriterionKind};
use intro_scorer_core::scoring::domain::score_report::ScoreReport;
#[cfg(feature = "whisper")]
use intro_scorer_core::shared::model_resolver;
use intro_scorer_core::text::infrastructure::word_tokenizer::WordTokenizer;

use settings::Settings;

/// Exit status for invalid input.
const EXIT_CLIENT_ERROR: i32 = 1;
/// Exit status when a collaborator (grammar, sentiment, transcription) fails.
const EXIT_SERVICE_ERROR: i32 = 2;

/// Rubric scoring for spoken self-introductions.
#[derive(Parser)]
#[command(name = "intro-scorer")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// LanguageTool server used for grammar checking.
    #[arg(long, global = true)]
    grammar_endpoint: Option<String>,

    /// LanguageTool language code (e.g. en-US, en-GB).
    #[arg(long, global = true)]
    language: Option<String>,

    /// Print the full report as JSON.
    #[arg(long, global = true)]
    json: bool,

    /// Store the effective grammar settings as the new defaults.
    #[arg(long, global = true)]
    save_settings: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Score a typed transcript (argument, --file, or stdin).
    Text {
        /// Transcript text.
        transcript: Option<String>,

        /// Read the transcript from a file.
        #[arg(long, conflicts_with = "transcript")]
        file: Option<PathBuf>,

        /// Speech duration in seconds (defaults to the configured duration).
        /// An explicit value <= 0 is scored as 0 wpm ("Too slow") rather than
        /// being replaced by the default.
        #[arg(long, allow_negative_numbers = true)]
        duration: Option<f64>,
    },
    /// Score a recording. Transcribes in-process when built with the
    /// `whisper` feature, otherwise reads the JSON output of a Whisper run.
    Audio {
        /// Recorded audio file.
        audio: PathBuf,

        /// Whisper JSON output to use instead of transcribing
        /// (without the `whisper` feature, defaults to the audio path with a .json extension).
        #[arg(long)]
        transcription: Option<PathBuf>,

        /// Speech duration in seconds; estimated from the transcription when omitted or <= 0.
        #[arg(long, allow_negative_numbers = true)]
        duration: Option<f64>,

        /// Whisper model name (e.g. base, tiny.en); downloaded on first use.
        #[arg(long)]
        model: Option<String>,
    },
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(exit_code(e.as_ref()));
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    validate(&cli)?;

    let mut settings = Settings::load();
    if let Some(endpoint) = &cli.grammar_endpoint {
        settings.grammar_endpoint = endpoint.clone();
    }
    if let Some(language) = &cli.language {
        settings.grammar_language = language.clone();
    }
    if cli.save_settings {
        match settings.save() {
            Ok(path) => log::info!("Settings saved to {}", path.display()),
            Err(e) => log::warn!("Failed to save settings: {e}"),
        }
    }

    let scorer = build_scorer(&settings)?;

    match cli.command {
        Command::Text {
            transcript,
            file,
            duration,
        } => {
            let text = read_transcript(transcript, file.as_deref())?;
            let duration = duration.unwrap_or(settings.default_duration_sec);
            let report = scorer.score(&text, duration)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", format_report(&report));
            }
        }
        Command::Audio {
            audio,
            transcription,
            duration,
            model,
        } => {
            let model = model.unwrap_or_else(|| settings.whisper_model.clone());
            let transcriber = build_transcriber(&model, transcription.as_deref())?;
            let use_case = ScoreAudioUseCase::new(transcriber, scorer);
            let report = use_case.execute(&audio, duration)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("Transcript: {}", report.transcript);
                println!("Duration used: {:.1}s", report.duration_sec_used);
                print!("{}", format_report(&report.score));
            }
        }
    }

    Ok(())
}

fn build_scorer(settings: &Settings) -> Result<ScoreTranscriptUseCase, Box<dyn std::error::Error>> {
    log::info!(
        "Grammar checks via {} ({})",
        settings.grammar_endpoint,
        settings.grammar_language
    );
    Ok(ScoreTranscriptUseCase::new(
        Box::new(WordTokenizer::new()?),
        Box::new(LanguageToolChecker::new(
            &settings.grammar_endpoint,
            &settings.grammar_language,
        )?),
        Box::new(VaderSentimentScorer::new()),
    ))
}

fn build_transcriber(
    model: &str,
    transcription: Option<&Path>,
) -> Result<Box<dyn SpeechTranscriber>, Box<dyn std::error::Error>> {
    match transcription {
        Some(path) => Ok(Box::new(
            WhisperJsonTranscriber::new(model).with_transcription_path(path),
        )),
        None => default_transcriber(model),
    }
}

#[cfg(feature = "whisper")]
fn default_transcriber(model: &str) -> Result<Box<dyn SpeechTranscriber>, Box<dyn std::error::Error>> {
    let model_path = model_resolver::resolve_whisper_model(model)?;
    log::info!("Transcribing with Whisper {model} ({})", model_path.display());
    Ok(Box::new(WhisperTranscriber::new(model, &model_path)?))
}

#[cfg(not(feature = "whisper"))]
fn default_transcriber(model: &str) -> Result<Box<dyn SpeechTranscriber>, Box<dyn std::error::Error>> {
    log::info!("Built without the whisper feature; reading Whisper JSON next to the recording");
    Ok(Box::new(WhisperJsonTranscriber::new(model)))
}

fn read_transcript(
    transcript: Option<String>,
    file: Option<&Path>,
) -> Result<String, Box<dyn std::error::Error>> {
    if let Some(text) = transcript {
        return Ok(text);
    }
    if let Some(path) = file {
        return std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read transcript {}: {e}", path.display()).into());
    }
    let mut text = String::new();
    io::stdin().read_to_string(&mut text)?;
    Ok(text)
}

fn validate(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    match &cli.command {
        Command::Text { file, duration, .. } => {
            if let Some(path) = file {
                if !path.exists() {
                    return Err(format!("Transcript file not found: {}", path.display()).into());
                }
            }
            validate_duration(*duration)?;
        }
        Command::Audio {
            audio,
            transcription,
            duration,
            ..
        } => {
            if !audio.exists() {
                return Err(format!("Audio file not found: {}", audio.display()).into());
            }
            if let Some(path) = transcription {
                if !path.exists() {
                    return Err(
                        format!("Transcription file not found: {}", path.display()).into(),
                    );
                }
            }
            validate_duration(*duration)?;
        }
    }
    if let Some(endpoint) = &cli.grammar_endpoint {
        if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
            return Err(format!("Grammar endpoint must be an http(s) URL, got '{endpoint}'").into());
        }
    }
    Ok(())
}

fn validate_duration(duration: Option<f64>) -> Result<(), Box<dyn std::error::Error>> {
    match duration {
        Some(d) if !d.is_finite() => Err(format!("Duration must be a finite number, got {d}").into()),
        _ => Ok(()),
    }
}

fn exit_code(error: &(dyn std::error::Error + 'static)) -> i32 {
    match error.downcast_ref::<ScoringError>() {
        Some(e) if !e.is_client_error() => EXIT_SERVICE_ERROR,
        _ => EXIT_CLIENT_ERROR,
    }
}

fn format_report(report: &ScoreReport) -> String {
    let mut lines = vec![format!(
        "Overall score: {}/{} ({} words, {:.1} wpm)",
        report.overall_score,
        max_total_points(),
        report.word_count,
        report.wpm
    )];
    for kind in CriterionKind::ALL {
        lines.push(format!(
            "  {:22} {:>2}/{:<2}  {}",
            kind.to_string(),
            report.criteria.points(kind),
            kind.max_points(),
            report.criteria.summary(kind)
        ));
    }
    lines.push(String::new());
    lines.join("\n")
}
