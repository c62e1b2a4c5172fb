#[cfg(feature = "whisper")]
pub mod ffmpeg_audio_decoder;
pub mod whisper_json_transcriber;
#[cfg(feature = "whisper")]
pub mod whisper_transcriber;
