//! Audio decoding using symphonia.

use std::fs::File;
use std::path::Path;

use symphonia::core::audio::{AudioBuffer, AudioBufferRef, Signal};
use symphonia::core::sample::Sample;
use symphonia::core::codecs::{CODEC_TYPE_NULL, DecoderOptions};
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::{MediaSourceStream, MediaSourceStreamOptions};
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

use crate::error::{Error, Result};

use super::AudioSource;

/// Decode an audio file into an [`AudioSource`].
///
/// All channels are kept, interleaved, so each extracted segment carries
/// the same channel layout as the session audio. Supports WAV, FLAC, MP3,
/// and AAC.
pub fn decode_audio_file(path: &Path) -> Result<AudioSource> {
    let file = File::open(path).map_err(|e| Error::SourceUnavailable {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mss = MediaSourceStream::new(Box::new(file), MediaSourceStreamOptions::default());

    let mut hint = Hint::new();
    if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
        hint.with_extension(ext);
    }

    let probed = symphonia::default::get_probe()
        .format(
            &hint,
            mss,
            &FormatOptions::default(),
            &MetadataOptions::default(),
        )
        .map_err(|e| Error::AudioDecode {
            path: path.to_path_buf(),
            source: Box::new(e),
        })?;

    let mut format = probed.format;

    let track = format
        .tracks()
        .iter()
        .find(|t| t.codec_params.codec != CODEC_TYPE_NULL)
        .ok_or_else(|| Error::NoAudioTracks {
            path: path.to_path_buf(),
        })?;

    let track_id = track.id;
    let sample_rate = track
        .codec_params
        .sample_rate
        .ok_or_else(|| Error::AudioDecode {
            path: path.to_path_buf(),
            source: "missing sample rate".into(),
        })?;
    let channels = track
        .codec_params
        .channels
        .map_or(1, symphonia::core::audio::Channels::count);

    let mut decoder = symphonia::default::get_codecs()
        .make(&track.codec_params, &DecoderOptions::default())
        .map_err(|e| Error::AudioDecode {
            path: path.to_path_buf(),
            source: Box::new(e),
        })?;

    let mut samples = Vec::new();

    loop {
        let packet = match format.next_packet() {
            Ok(packet) => packet,
            Err(symphonia::core::errors::Error::IoError(e))
                if e.kind() == std::io::ErrorKind::UnexpectedEof =>
            {
                break;
            }
            Err(e) => {
                return Err(Error::AudioDecode {
                    path: path.to_path_buf(),
                    source: Box::new(e),
                });
            }
        };

        if packet.track_id() != track_id {
            continue;
        }

        let decoded = decoder.decode(&packet).map_err(|e| Error::AudioDecode {
            path: path.to_path_buf(),
            source: Box::new(e),
        })?;

        append_interleaved(&decoded, channels, &mut samples).map_err(|format_name| {
            Error::AudioDecode {
                path: path.to_path_buf(),
                source: format!("unsupported sample format '{format_name}'").into(),
            }
        })?;
    }

    #[allow(clippy::cast_possible_truncation)]
    let channels = channels.max(1) as u16;

    Ok(AudioSource::from_parts(samples, channels, sample_rate))
}

/// Append a decoded buffer to the output, interleaving the channels.
///
/// Returns the name of the sample format when the buffer cannot be
/// converted, so the caller can surface a decode diagnostic instead of
/// producing a truncated source.
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
fn append_interleaved(
    buffer: &AudioBufferRef,
    channels: usize,
    output: &mut Vec<f32>,
) -> std::result::Result<(), &'static str> {
    const I16_NORM: f32 = 32768.0;
    const I24_NORM: f32 = 8_388_608.0;
    const I32_NORM: f32 = 2_147_483_648.0;
    const U8_MID: f32 = 128.0;

    match buffer {
        AudioBufferRef::F32(buf) => extend_converted(buf, channels, output, |s| s),
        AudioBufferRef::F64(buf) => extend_converted(buf, channels, output, |s| s as f32),
        AudioBufferRef::S16(buf) => {
            extend_converted(buf, channels, output, |s| f32::from(s) / I16_NORM);
        }
        AudioBufferRef::S24(buf) => {
            extend_converted(buf, channels, output, |s| s.inner() as f32 / I24_NORM);
        }
        AudioBufferRef::S32(buf) => {
            extend_converted(buf, channels, output, |s| s as f32 / I32_NORM);
        }
        AudioBufferRef::U8(buf) => {
            extend_converted(buf, channels, output, |s| {
                (f32::from(s) - U8_MID) / U8_MID
            });
        }
        AudioBufferRef::S8(_) => return Err("s8"),
        AudioBufferRef::U16(_) => return Err("u16"),
        AudioBufferRef::U24(_) => return Err("u24"),
        AudioBufferRef::U32(_) => return Err("u32"),
    }
    Ok(())
}

fn extend_converted<S: Sample>(
    buf: &AudioBuffer<S>,
    channels: usize,
    output: &mut Vec<f32>,
    convert: impl Fn(S) -> f32,
) {
    if channels == 1 {
        output.extend(buf.chan(0).iter().copied().map(convert));
    } else {
        for i in 0..buf.frames() {
            for ch in 0..channels {
                output.push(convert(buf.chan(ch)[i]));
            }
        }
    }
}
