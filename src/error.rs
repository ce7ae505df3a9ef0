//! Error types for sessionsplit.

/// Result type alias for sessionsplit operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for sessionsplit.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration directory could not be determined.
    #[error("could not determine configuration directory for this platform")]
    ConfigDirNotFound,

    /// Failed to read configuration file.
    #[error("failed to read config file '{path}'")]
    ConfigRead {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}'")]
    ConfigParse {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying parse error.
        #[source]
        source: toml::de::Error,
    },

    /// Failed to write configuration file.
    #[error("failed to write config file '{path}'")]
    ConfigWrite {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize configuration.
    #[error("failed to serialize config")]
    ConfigSerialize {
        /// Underlying serialization error.
        #[source]
        source: toml::ser::Error,
    },

    /// An input source (session export, name list, audio file) is missing
    /// or unreadable.
    #[error("cannot open input '{path}'")]
    SourceUnavailable {
        /// Path that was attempted.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Malformed timestamp text.
    #[error("invalid timecode '{text}': {reason}")]
    TimecodeFormat {
        /// The text that failed to parse.
        text: String,
        /// Description of the format violation.
        reason: &'static str,
    },

    /// Session export file does not have the expected table structure.
    #[error("invalid session export '{path}': {message}")]
    SessionExport {
        /// Path to the session export file.
        path: std::path::PathBuf,
        /// Description of the structural problem.
        message: String,
    },

    /// A timeline violates the chronological-ordering precondition.
    #[error(
        "{timeline} timeline is not sorted by start time (entry {index} starts before its predecessor)"
    )]
    UnsortedTimeline {
        /// Which timeline is out of order ("clip" or "group").
        timeline: &'static str,
        /// Index of the first out-of-order entry.
        index: usize,
    },

    /// One or more groups failed boundary reconciliation.
    #[error("timeline validation failed: {failed} group(s) did not match clip boundaries")]
    ValidationFailed {
        /// Number of groups that failed to match.
        failed: usize,
    },

    /// Name list does not satisfy the count/uniqueness requirements.
    #[error(
        "name list invalid: expected {expected} name(s), got {actual}; duplicates: {duplicates:?}"
    )]
    NameValidation {
        /// Required number of names.
        expected: usize,
        /// Number of names actually supplied.
        actual: usize,
        /// Sanitized names that occur more than once, in first-seen order.
        duplicates: Vec<String>,
    },

    /// A segment interval falls outside the audio source.
    #[error(
        "segment {index} ('{name}') out of range: {start_ms}..{end_ms} ms against {duration_ms} ms of audio"
    )]
    SegmentOutOfRange {
        /// Zero-based index of the failing interval.
        index: usize,
        /// Output name of the failing interval.
        name: String,
        /// Requested start in milliseconds.
        start_ms: u64,
        /// Requested end in milliseconds.
        end_ms: u64,
        /// Total duration of the audio source in milliseconds.
        duration_ms: u64,
    },

    /// One or more segments could not be extracted.
    #[error("{failed} segment(s) failed to extract")]
    SliceFailed {
        /// Number of segments that failed.
        failed: usize,
    },

    /// Failed to decode audio.
    #[error("failed to decode audio from '{path}'")]
    AudioDecode {
        /// Path to the audio file.
        path: std::path::PathBuf,
        /// Underlying error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// No audio tracks found.
    #[error("no audio tracks found in '{path}'")]
    NoAudioTracks {
        /// Path to the audio file.
        path: std::path::PathBuf,
    },

    /// Failed to write WAV file.
    #[error("failed to write WAV file '{path}'")]
    WavWrite {
        /// Path to the WAV file.
        path: std::path::PathBuf,
        /// Underlying error.
        #[source]
        source: hound::Error,
    },

    /// Failed to create output directory.
    #[error("failed to create output directory '{path}'")]
    OutputDirCreate {
        /// Path to the output directory.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}
