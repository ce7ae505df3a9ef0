//! Segment extraction.
//!
//! Maps validated group boundaries onto the decoded audio source and
//! writes one WAV file per group. Intervals are processed sequentially in
//! order; each interval is independent, so a range failure on one never
//! corrupts another.

mod writer;

pub use writer::SegmentWriter;

use std::path::PathBuf;

use serde::Serialize;

use crate::audio::AudioSource;
use crate::error::{Error, Result};
use crate::session::Interval;

/// A validated interval paired with its output name.
#[derive(Debug, Clone)]
pub struct NamedInterval {
    /// Boundaries of the segment.
    pub interval: Interval,
    /// Output name, unique within the batch.
    pub name: String,
}

/// Outcome of extracting one interval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SliceOutcome {
    /// Zero-based interval index.
    pub index: usize,
    /// Output name of the interval.
    pub name: String,
    /// Whether the segment was written.
    pub ok: bool,
    /// Failure description, when `ok` is false.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    /// Path of the written file, when `ok` is true.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

/// Per-interval results of one slicing run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SliceReport {
    /// One outcome per interval, in interval order.
    pub outcomes: Vec<SliceOutcome>,
}

impl SliceReport {
    /// True iff every interval was extracted.
    #[must_use]
    pub fn all_ok(&self) -> bool {
        self.outcomes.iter().all(|o| o.ok)
    }

    /// Number of intervals that failed.
    #[must_use]
    pub fn failed(&self) -> usize {
        self.outcomes.iter().filter(|o| !o.ok).count()
    }
}

/// Extracts audio segments and writes them as WAV files.
pub struct AudioSlicer {
    writer: SegmentWriter,
    fail_fast: bool,
}

impl AudioSlicer {
    /// Create a slicer writing into `output_dir`.
    ///
    /// With `fail_fast` the first out-of-range interval aborts the batch;
    /// otherwise it is recorded in the report and later intervals still
    /// run.
    #[must_use]
    pub fn new(output_dir: PathBuf, fail_fast: bool) -> Self {
        Self {
            writer: SegmentWriter::new(output_dir),
            fail_fast,
        }
    }

    /// Extract every interval from `source`, invoking `observer` after
    /// each one in interval order.
    ///
    /// # Errors
    ///
    /// Returns an error when the output directory cannot be created, when
    /// a WAV file cannot be written, or, under fail-fast, for the first
    /// out-of-range interval.
    pub fn slice(
        &self,
        source: &AudioSource,
        intervals: &[NamedInterval],
        observer: &mut dyn FnMut(&SliceOutcome),
    ) -> Result<SliceReport> {
        // Idempotent if the directory already exists.
        self.writer.ensure_output_dir()?;

        let duration_ms = source.duration_ms();
        let mut outcomes = Vec::with_capacity(intervals.len());

        for (index, named) in intervals.iter().enumerate() {
            let outcome = match check_range(index, named, duration_ms) {
                Err(e) => {
                    if self.fail_fast {
                        return Err(e);
                    }
                    SliceOutcome {
                        index,
                        name: named.name.clone(),
                        ok: false,
                        detail: Some(e.to_string()),
                        path: None,
                    }
                }
                Ok(()) => {
                    let samples = source
                        .samples_between(named.interval.start_ms(), named.interval.end_ms());
                    let path = self.writer.write_segment(
                        &named.name,
                        samples,
                        source.channels(),
                        source.sample_rate(),
                    )?;
                    SliceOutcome {
                        index,
                        name: named.name.clone(),
                        ok: true,
                        detail: None,
                        path: Some(path),
                    }
                }
            };

            observer(&outcome);
            outcomes.push(outcome);
        }

        Ok(SliceReport { outcomes })
    }
}

/// Validate an interval against the source duration.
fn check_range(index: usize, named: &NamedInterval, duration_ms: u64) -> Result<()> {
    let start_ms = named.interval.start_ms();
    let end_ms = named.interval.end_ms();
    if start_ms > end_ms || end_ms > duration_ms {
        return Err(Error::SegmentOutOfRange {
            index,
            name: named.name.clone(),
            start_ms,
            end_ms,
            duration_ms,
        });
    }
    Ok(())
}
