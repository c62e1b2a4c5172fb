/// Duration assumed when neither the caller nor the transcription supplies one.
pub const DEFAULT_DURATION_SEC: f64 = 60.0;

pub const SECONDS_PER_MINUTE: f64 = 60.0;

pub const DEFAULT_GRAMMAR_ENDPOINT: &str = "https://api.languagetool.org";
pub const DEFAULT_GRAMMAR_LANGUAGE: &str = "en-US";

pub const DEFAULT_WHISPER_MODEL: &str = "base";

/// Must-Have points per matched category, and the criterion ceiling.
pub const MUST_HAVE_POINTS_PER_CATEGORY: u32 = 4;
pub const MUST_HAVE_MAX_POINTS: u32 = 20;

/// Good-to-Have points per matched category, and the criterion ceiling.
pub const GOOD_TO_HAVE_POINTS_PER_CATEGORY: u32 = 2;
pub const GOOD_TO_HAVE_MAX_POINTS: u32 = 10;

pub const FLOW_POINTS: u32 = 5;
/// Fewest anchors that must be present before ordering is judged.
pub const FLOW_MIN_ANCHORS: usize = 3;

/// Grammar issues per 100 words at which grammar quality bottoms out.
pub const GRAMMAR_ERROR_CEILING_PER_100: f64 = 10.0;

/// Lexical diversity score when the transcript yields no tokens.
pub const EMPTY_TTR_POINTS: u32 = 2;

/// Sample rate Whisper models expect, in Hz.
pub const WHISPER_SAMPLE_RATE: u32 = 16000;
/// Where ggml Whisper model files are downloaded from.
pub const WHISPER_MODEL_BASE_URL: &str = "https://huggingface.co/ggerganov/whisper.cpp/resolve/main";
