//! WAV segment writing.

use std::fs;
use std::path::{Path, PathBuf};

use hound::{SampleFormat, WavSpec, WavWriter};

use crate::constants::SEGMENT_EXTENSION;
use crate::error::{Error, Result};

/// Writes extracted segments as 16-bit PCM WAV files.
pub struct SegmentWriter {
    /// Destination directory for segments.
    output_dir: PathBuf,
}

impl SegmentWriter {
    /// Create a writer targeting the given directory.
    #[must_use]
    pub const fn new(output_dir: PathBuf) -> Self {
        Self { output_dir }
    }

    /// Create the output directory if it does not exist yet.
    pub fn ensure_output_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.output_dir).map_err(|e| Error::OutputDirCreate {
            path: self.output_dir.clone(),
            source: e,
        })
    }

    /// Write interleaved samples under `<output_dir>/<name>.wav`.
    ///
    /// The source channel count and sample rate are preserved. Name
    /// uniqueness is the name assigner's invariant, so collisions cannot
    /// occur within one run.
    pub fn write_segment(
        &self,
        name: &str,
        samples: &[f32],
        channels: u16,
        sample_rate: u32,
    ) -> Result<PathBuf> {
        let path = self
            .output_dir
            .join(format!("{name}.{SEGMENT_EXTENSION}"));
        write_wav_file(&path, samples, channels, sample_rate)?;
        Ok(path)
    }
}

/// Write samples to a WAV file.
fn write_wav_file(path: &Path, samples: &[f32], channels: u16, sample_rate: u32) -> Result<()> {
    let spec = WavSpec {
        channels,
        sample_rate,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };

    let mut writer = WavWriter::create(path, spec).map_err(|e| Error::WavWrite {
        path: path.to_path_buf(),
        source: e,
    })?;

    // Exact inverse of the decode normalization: i16 values survive a
    // decode/slice/write cycle bit-for-bit.
    for &sample in samples {
        #[allow(clippy::cast_possible_truncation)]
        let sample_i16 = (sample * 32768.0).round().clamp(-32768.0, 32767.0) as i16;
        writer.write_sample(sample_i16).map_err(|e| Error::WavWrite {
            path: path.to_path_buf(),
            source: e,
        })?;
    }

    writer.finalize().map_err(|e| Error::WavWrite {
        path: path.to_path_buf(),
        source: e,
    })
}
