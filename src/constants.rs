//! Application-wide constants.

/// Application name used for config directories and user-facing messages.
pub const APP_NAME: &str = "sessionsplit";

/// Default session export file name.
pub const DEFAULT_SESSION_FILE: &str = "session.txt";

/// Default name list file name.
pub const DEFAULT_NAMES_FILE: &str = "names.txt";

/// Default session audio file name.
pub const DEFAULT_AUDIO_FILE: &str = "session.wav";

/// Default output directory for extracted segments.
pub const DEFAULT_OUTPUT_DIR: &str = "segments";

/// Marker substring that opens a table block in a session export.
pub const TRACK_MARKER: &str = "TRACK NAME";

/// Marker substring of the column-header row inside a table block.
pub const COLUMN_MARKER: &str = "CHANNEL";

/// Column holding segment start timecodes.
pub const START_COLUMN: &str = "START TIME";

/// Column holding segment end timecodes.
pub const END_COLUMN: &str = "END TIME";

/// Characters stripped from output names because they are illegal in
/// filesystem names on at least one supported platform.
pub const ILLEGAL_FILENAME_CHARS: &[char] = &['\\', '/', ':', '*', '?', '"', '<', '>', '|'];

/// Extension of extracted segment files.
pub const SEGMENT_EXTENSION: &str = "wav";
