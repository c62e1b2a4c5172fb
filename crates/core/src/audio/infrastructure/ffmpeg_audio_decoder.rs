use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AudioDecodeError {
    #[error("no audio stream in {0}")]
    NoAudioStream(PathBuf),
    #[error("failed to decode audio: {0}")]
    Ffmpeg(#[from] ffmpeg_next::Error),
}

/// Decodes any container ffmpeg understands into mono `f32` PCM.
#[derive(Debug, Default)]
pub struct FfmpegAudioDecoder;

impl FfmpegAudioDecoder {
    /// Decodes the best audio stream of `path`, resampled to `target_sample_rate`.
    pub fn decode_mono(
        &self,
        path: &Path,
        target_sample_rate: u32,
    ) -> Result<Vec<f32>, AudioDecodeError> {
        ffmpeg_next::init()?;

        let mut ictx = ffmpeg_next::format::input(path)?;

        let audio_stream = ictx
            .streams()
            .best(ffmpeg_next::media::Type::Audio)
            .ok_or_else(|| AudioDecodeError::NoAudioStream(path.to_path_buf()))?;
        let audio_stream_index = audio_stream.index();

        let codec_ctx =
            ffmpeg_next::codec::context::Context::from_parameters(audio_stream.parameters())?;
        let mut decoder = codec_ctx.decoder().audio()?;

        let mut resampler = ffmpeg_next::software::resampling::Context::get(
            decoder.format(),
            decoder.channel_layout(),
            decoder.rate(),
            ffmpeg_next::format::Sample::F32(ffmpeg_next::format::sample::Type::Planar),
            ffmpeg_next::ChannelLayout::MONO,
            target_sample_rate,
        )?;

        let mut samples: Vec<f32> = Vec::new();
        let mut decoded = ffmpeg_next::util::frame::audio::Audio::empty();
        let mut resampled = ffmpeg_next::util::frame::audio::Audio::empty();

        for (stream, packet) in ictx.packets() {
            if stream.index() != audio_stream_index {
                continue;
            }
            decoder.send_packet(&packet)?;
            while decoder.receive_frame(&mut decoded).is_ok() {
                resampler.run(&decoded, &mut resampled)?;
                append_samples(&resampled, &mut samples);
            }
        }

        decoder.send_eof()?;
        while decoder.receive_frame(&mut decoded).is_ok() {
            resampler.run(&decoded, &mut resampled)?;
            append_samples(&resampled, &mut samples);
        }

        // The resampler may still hold buffered samples.
        if let Ok(Some(delay)) = resampler.flush(&mut resampled) {
            if delay.output > 0 {
                append_samples(&resampled, &mut samples);
            }
        }

        log::debug!(
            "Decoded {} samples ({:.1}s) from {}",
            samples.len(),
            samples.len() as f64 / target_sample_rate as f64,
            path.display()
        );
        Ok(samples)
    }
}

/// Appends the samples of a planar mono frame.
fn append_samples(frame: &ffmpeg_next::util::frame::audio::Audio, out: &mut Vec<f32>) {
    let num_samples = frame.samples();
    if num_samples == 0 {
        return;
    }
    let data = frame.data(0);
    let floats = unsafe { std::slice::from_raw_parts(data.as_ptr() as *const f32, num_samples) };
    out.extend_from_slice(floats);
}
