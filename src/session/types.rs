//! Session timeline types.

use crate::timecode::TimeCode;

/// A start/end pair on a session timeline.
///
/// Callers are expected to supply `start <= end`; the reconciliation scan
/// tolerates violations without failing the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    /// Start position.
    pub start: TimeCode,
    /// End position.
    pub end: TimeCode,
}

impl Interval {
    /// Create an interval from two timecodes.
    #[must_use]
    pub const fn new(start: TimeCode, end: TimeCode) -> Self {
        Self { start, end }
    }

    /// Start position in milliseconds.
    #[must_use]
    pub const fn start_ms(self) -> u64 {
        self.start.as_millis()
    }

    /// End position in milliseconds.
    #[must_use]
    pub const fn end_ms(self) -> u64 {
        self.end.as_millis()
    }
}

/// The two timelines parsed out of one session export.
#[derive(Debug, Clone)]
pub struct SessionTimelines {
    /// Every clip in the session, in chronological order.
    pub clips: Vec<Interval>,
    /// The coarser groups that must align to clip boundaries.
    pub groups: Vec<Interval>,
}
