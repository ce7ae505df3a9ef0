//! End-to-end pipeline tests over a generated session.

use std::fs;
use std::path::Path;

use hound::{SampleFormat, WavSpec, WavWriter};
use tempfile::TempDir;

use sessionsplit::pipeline::{EventSink, ProgressEvent, SplitOptions, Stage, run_split};

const EXPORT: &str = "SESSION NAME:\tdemo\n\
\n\
TRACK NAME:\tMusic\n\
CHANNEL \tEVENT \tCLIP NAME \tSTART TIME \tEND TIME \tDURATION \tSTATE\n\
1\t1\tclip-a\t0:00.000\t0:01.000\t0:01.000\tUnmuted\n\
1\t2\tclip-b\t0:01.000\t0:02.500\t0:01.500\tUnmuted\n\
1\t3\tclip-c\t0:02.500\t0:04.000\t0:01.500\tUnmuted\n\
\n\
TRACK NAME:\tGroups\n\
CHANNEL \tEVENT \tCLIP NAME \tSTART TIME \tEND TIME \tDURATION \tSTATE\n\
1\t1\tpart-1\t0:00.000\t0:02.500\t0:02.500\tUnmuted\n\
1\t2\tpart-2\t0:02.500\t0:04.000\t0:01.500\tUnmuted\n";

#[derive(Default)]
struct CollectSink {
    events: Vec<ProgressEvent>,
}

impl EventSink for CollectSink {
    fn emit(&mut self, event: &ProgressEvent) {
        self.events.push(event.clone());
    }
}

/// Deterministic 4000 ms mono ramp at 8 kHz, written as 16-bit WAV.
fn write_session_audio(path: &Path) -> Vec<i16> {
    let spec = WavSpec {
        channels: 1,
        sample_rate: 8000,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };
    let samples: Vec<i16> = (0..32_000_i32).map(|i| (i % 20_000 - 10_000) as i16).collect();

    let mut writer = WavWriter::create(path, spec).unwrap();
    for &sample in &samples {
        writer.write_sample(sample).unwrap();
    }
    writer.finalize().unwrap();
    samples
}

fn options(dir: &TempDir) -> SplitOptions {
    SplitOptions {
        session_file: dir.path().join("session.txt"),
        names_file: dir.path().join("names.txt"),
        audio_file: dir.path().join("session.wav"),
        output_dir: dir.path().join("segments"),
        check_only: false,
        fail_fast: false,
        progress_enabled: false,
    }
}

fn read_samples(path: &Path) -> Vec<i16> {
    let mut reader = hound::WavReader::open(path).unwrap();
    reader.samples::<i16>().map(|s| s.unwrap()).collect()
}

#[test]
fn test_split_reconstructs_source_audio() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("session.txt"), EXPORT).unwrap();
    fs::write(dir.path().join("names.txt"), "intro\noutro\n").unwrap();
    let original = write_session_audio(&dir.path().join("session.wav"));

    let mut sink = CollectSink::default();
    let summary = run_split(&options(&dir), &mut sink).unwrap();

    assert!(summary.validation.passed());
    let slices = summary.slices.unwrap();
    assert!(slices.all_ok());

    // Two non-overlapping segments whose concatenation is the source.
    let intro = read_samples(&dir.path().join("segments/intro.wav"));
    let outro = read_samples(&dir.path().join("segments/outro.wav"));
    assert_eq!(intro.len(), 20_000); // 2500 ms at 8 kHz
    assert_eq!(outro.len(), 12_000); // 1500 ms at 8 kHz

    let mut reconstructed = intro;
    reconstructed.extend(outro);
    assert_eq!(reconstructed, original);
}

#[test]
fn test_split_emits_events_in_order() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("session.txt"), EXPORT).unwrap();
    fs::write(dir.path().join("names.txt"), "intro\noutro\n").unwrap();
    write_session_audio(&dir.path().join("session.wav"));

    let mut sink = CollectSink::default();
    run_split(&options(&dir), &mut sink).unwrap();

    let stages: Vec<(Stage, usize, bool)> = sink
        .events
        .iter()
        .map(|e| (e.stage, e.index, e.ok))
        .collect();
    assert_eq!(
        stages,
        vec![
            (Stage::Validate, 0, true),
            (Stage::Validate, 1, true),
            (Stage::Slice, 0, true),
            (Stage::Slice, 1, true),
        ]
    );
    assert!(sink.events.iter().all(|e| e.total == 2));
}

#[test]
fn test_missing_names_file_falls_back_to_ordinals() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("session.txt"), EXPORT).unwrap();
    write_session_audio(&dir.path().join("session.wav"));

    let mut sink = CollectSink::default();
    let summary = run_split(&options(&dir), &mut sink).unwrap();

    assert!(summary.slices.unwrap().all_ok());
    assert!(dir.path().join("segments/1.wav").exists());
    assert!(dir.path().join("segments/2.wav").exists());
}

#[test]
fn test_failed_validation_stops_before_slicing() {
    let dir = TempDir::new().unwrap();
    // Group ends at 2.600 which is not a clip boundary.
    let export = EXPORT.replace("0:02.500\t0:02.500", "0:02.600\t0:02.600");
    fs::write(dir.path().join("session.txt"), export).unwrap();
    fs::write(dir.path().join("names.txt"), "intro\noutro\n").unwrap();
    write_session_audio(&dir.path().join("session.wav"));

    let mut sink = CollectSink::default();
    let summary = run_split(&options(&dir), &mut sink).unwrap();

    assert!(!summary.validation.passed());
    assert_eq!(summary.validation.failed_indices(), vec![0]);
    assert!(summary.slices.is_none());
    // No output directory appears for an invalid session.
    assert!(!dir.path().join("segments").exists());

    let failure = &sink.events[0];
    assert_eq!(failure.stage, Stage::Validate);
    assert!(!failure.ok);
    assert_eq!(failure.detail.as_deref(), Some("start true end false"));
}

#[test]
fn test_check_only_never_touches_audio() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("session.txt"), EXPORT).unwrap();
    // No audio and no names on disk: check-only must still succeed.
    let opts = SplitOptions {
        check_only: true,
        ..options(&dir)
    };

    let mut sink = CollectSink::default();
    let summary = run_split(&opts, &mut sink).unwrap();

    assert!(summary.validation.passed());
    assert!(summary.slices.is_none());
}

#[test]
fn test_duplicate_names_abort_before_decoding() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("session.txt"), EXPORT).unwrap();
    fs::write(dir.path().join("names.txt"), "same\nsame\n").unwrap();
    // Deliberately no audio file: name validation must fail first.

    let mut sink = CollectSink::default();
    let err = run_split(&options(&dir), &mut sink).unwrap_err();
    assert!(matches!(err, sessionsplit::Error::NameValidation { .. }));
    assert!(err.to_string().contains("same"));
}
