//! Audio source handling.

mod decode;

pub use decode::decode_audio_file;

/// Decoded audio, addressable by millisecond range.
///
/// Samples are interleaved f32 in `[-1.0, 1.0]`, all channels preserved.
/// The source is read-only once decoded; slicing borrows from it.
#[derive(Debug, Clone)]
pub struct AudioSource {
    samples: Vec<f32>,
    channels: u16,
    sample_rate: u32,
}

impl AudioSource {
    /// Build a source from interleaved samples.
    ///
    /// `channels` and `sample_rate` must be non-zero; partial trailing
    /// frames are ignored by the frame arithmetic.
    #[must_use]
    pub const fn from_parts(samples: Vec<f32>, channels: u16, sample_rate: u32) -> Self {
        Self {
            samples,
            channels,
            sample_rate,
        }
    }

    /// Number of channels.
    #[must_use]
    pub const fn channels(&self) -> u16 {
        self.channels
    }

    /// Sample rate in Hz.
    #[must_use]
    pub const fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Number of frames (samples per channel).
    #[must_use]
    pub fn frames(&self) -> usize {
        self.samples.len() / self.channels as usize
    }

    /// Total duration in whole milliseconds, rounded down.
    #[must_use]
    pub fn duration_ms(&self) -> u64 {
        self.frames() as u64 * 1000 / u64::from(self.sample_rate)
    }

    /// Interleaved samples for the half-open range `[start_ms, end_ms)`.
    ///
    /// Millisecond offsets map to frame offsets by flooring; requests past
    /// the end of the source are clamped, and an inverted range yields an
    /// empty slice. Range validation with diagnostics happens in the
    /// slicer before this is called.
    #[must_use]
    pub fn samples_between(&self, start_ms: u64, end_ms: u64) -> &[f32] {
        let start = self.frame_at(start_ms).min(self.frames());
        let end = self.frame_at(end_ms).min(self.frames()).max(start);
        let width = self.channels as usize;
        &self.samples[start * width..end * width]
    }

    /// Frame index of a millisecond offset.
    fn frame_at(&self, ms: u64) -> usize {
        let frame = ms.saturating_mul(u64::from(self.sample_rate)) / 1000;
        usize::try_from(frame).unwrap_or(usize::MAX)
    }
}
