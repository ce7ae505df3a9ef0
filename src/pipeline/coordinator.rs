//! Pipeline coordination.

use std::path::PathBuf;

use tracing::info;

use crate::audio;
use crate::error::Result;
use crate::matcher::{self, CursorPolicy, ValidationReport};
use crate::names;
use crate::session;
use crate::slicer::{AudioSlicer, NamedInterval, SliceReport};

use super::events::{EventSink, ProgressEvent, Stage};
use super::progress;

/// Inputs and policies for one split run.
#[derive(Debug, Clone)]
pub struct SplitOptions {
    /// Path to the session export.
    pub session_file: PathBuf,
    /// Path to the name list; absence selects ordinal names.
    pub names_file: PathBuf,
    /// Path to the session audio.
    pub audio_file: PathBuf,
    /// Directory segments are written into.
    pub output_dir: PathBuf,
    /// Stop after reconciliation, touching neither names nor audio.
    pub check_only: bool,
    /// Abort on the first out-of-range segment instead of skipping it.
    pub fail_fast: bool,
    /// Render an interactive progress bar during extraction.
    pub progress_enabled: bool,
}

/// What a split run produced.
#[derive(Debug, Clone)]
pub struct SplitSummary {
    /// Reconciliation outcome, always present.
    pub validation: ValidationReport,
    /// Extraction outcomes; `None` when validation failed or in
    /// check-only mode.
    pub slices: Option<SliceReport>,
}

/// Run the split pipeline.
///
/// Reconciliation mismatches are data: they are reported in the summary
/// (and as events), not as errors. Slicing only runs when every group
/// matched.
///
/// # Errors
///
/// Returns an error for unavailable or malformed inputs, an invalid name
/// list, audio decode or write failures, and, under fail-fast, the
/// first out-of-range segment.
pub fn run_split(opts: &SplitOptions, sink: &mut dyn EventSink) -> Result<SplitSummary> {
    let timelines = session::parse_session_export(&opts.session_file)?;
    info!(
        "Parsed session export '{}': {} clip(s), {} group(s)",
        opts.session_file.display(),
        timelines.clips.len(),
        timelines.groups.len()
    );

    let validation = matcher::reconcile(
        &timelines.clips,
        &timelines.groups,
        CursorPolicy::default(),
    )?;

    let total = validation.groups.len();
    for check in &validation.groups {
        sink.emit(&ProgressEvent {
            stage: Stage::Validate,
            index: check.index,
            total,
            ok: check.matched(),
            detail: (!check.matched()).then(|| {
                format!("start {} end {}", check.start_found, check.end_found)
            }),
        });
    }

    if !validation.passed() || opts.check_only {
        return Ok(SplitSummary {
            validation,
            slices: None,
        });
    }

    let candidates = names::load_name_list(&opts.names_file)?;
    let assigned = names::assign(timelines.groups.len(), candidates)?;

    let source = audio::decode_audio_file(&opts.audio_file)?;
    info!(
        "Decoded '{}': {} ms, {} channel(s) at {} Hz",
        opts.audio_file.display(),
        source.duration_ms(),
        source.channels(),
        source.sample_rate()
    );

    let intervals: Vec<NamedInterval> = timelines
        .groups
        .iter()
        .zip(assigned)
        .map(|(interval, name)| NamedInterval {
            interval: *interval,
            name,
        })
        .collect();

    let bar = progress::create_slice_progress(intervals.len(), opts.progress_enabled);
    let slicer = AudioSlicer::new(opts.output_dir.clone(), opts.fail_fast);
    let total = intervals.len();

    let report = slicer.slice(&source, &intervals, &mut |outcome| {
        sink.emit(&ProgressEvent {
            stage: Stage::Slice,
            index: outcome.index,
            total,
            ok: outcome.ok,
            detail: outcome
                .detail
                .clone()
                .or_else(|| outcome.path.as_ref().map(|p| p.display().to_string())),
        });
        progress::inc_progress(bar.as_ref());
    });
    let report = match report {
        Ok(report) => report,
        Err(e) => {
            progress::finish_progress(bar, "Failed");
            return Err(e);
        }
    };

    progress::finish_progress(bar, "Complete");

    Ok(SplitSummary {
        validation,
        slices: Some(report),
    })
}
