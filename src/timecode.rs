//! Timecode parsing and millisecond conversion.
//!
//! Session exports express positions as `minutes:seconds.milliseconds`
//! text. All comparisons in the reconciliation scan happen on the integer
//! millisecond value, so the text is converted exactly once at parse time.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// A position in the session, stored as a millisecond offset.
///
/// Parsed from `m:s.fff` text. Fields have no upper bound beyond what fits
/// in the arithmetic: `1:75.000` is a valid 135-second timecode, matching
/// how session exports are compared in practice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeCode {
    millis: u64,
}

impl TimeCode {
    /// Build a timecode directly from a millisecond offset.
    #[must_use]
    pub const fn from_millis(millis: u64) -> Self {
        Self { millis }
    }

    /// The millisecond offset this timecode represents.
    #[must_use]
    pub const fn as_millis(self) -> u64 {
        self.millis
    }

    /// Parse `minutes:seconds.milliseconds` text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TimecodeFormat`] when the text does not split into
    /// exactly three unsigned integer fields via `:` and `.`.
    pub fn parse(text: &str) -> Result<Self> {
        let (minutes, rest) = text.split_once(':').ok_or_else(|| Error::TimecodeFormat {
            text: text.to_string(),
            reason: "missing ':' separator",
        })?;
        let (seconds, millis) = rest.split_once('.').ok_or_else(|| Error::TimecodeFormat {
            text: text.to_string(),
            reason: "missing '.' separator",
        })?;

        let minutes = parse_field(text, minutes)?;
        let seconds = parse_field(text, seconds)?;
        let millis = parse_field(text, millis)?;

        minutes
            .checked_mul(60_000)
            .and_then(|m| seconds.checked_mul(1000).and_then(|s| m.checked_add(s)))
            .and_then(|ms| ms.checked_add(millis))
            .map(Self::from_millis)
            .ok_or_else(|| Error::TimecodeFormat {
                text: text.to_string(),
                reason: "value overflows the millisecond range",
            })
    }
}

/// Parse a single timecode field as an unsigned integer.
///
/// Stricter than `str::parse::<u64>`: signs and non-ASCII digits are
/// rejected, so a stray extra separator surfaces as a format error here.
fn parse_field(text: &str, field: &str) -> Result<u64> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::TimecodeFormat {
            text: text.to_string(),
            reason: "field is not a non-negative integer",
        });
    }
    field.parse().map_err(|_| Error::TimecodeFormat {
        text: text.to_string(),
        reason: "field out of range",
    })
}

impl fmt::Display for TimeCode {
    /// Canonical `m:ss.fff` rendering; re-parsing it yields the same value.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{:02}.{:03}",
            self.millis / 60_000,
            (self.millis % 60_000) / 1000,
            self.millis % 1000
        )
    }
}

impl FromStr for TimeCode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
