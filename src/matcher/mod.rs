//! Timeline reconciliation.
//!
//! Verifies that every group's boundaries exist as clip boundaries in the
//! full clip timeline. The scan keeps one cursor into the clip list across
//! all groups and never backtracks, so a whole call is O(clips + groups).
//! Mismatches are data, reported per group, never errors.

mod report;

pub use report::{GroupCheck, ValidationReport};

use crate::error::{Error, Result};
use crate::session::Interval;

/// What the shared cursor does when a group fails to match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CursorPolicy {
    /// A failed group does not move the cursor; the next group retries
    /// from the same clip. A later still-valid group can then match even
    /// after an earlier failure.
    #[default]
    FreezeOnFailure,
    /// A failed group consumes the clips its scan examined, like a
    /// successful one. Failures can cascade into later groups.
    ConsumeOnFailure,
}

/// Reconcile the group timeline against the clip timeline.
///
/// Both timelines must be sorted by start time; out-of-order input is a
/// precondition violation and fails fast rather than producing wrong
/// matches.
///
/// For each group the clip list is scanned from the shared cursor:
/// * a clip starting exactly at the group's start marks the start found;
/// * a clip ending exactly at the group's end marks the end found and
///   terminates the scan;
/// * a clip starting and ending past the group's boundaries terminates
///   the scan as a failure (the end can no longer appear).
///
/// On a full match the cursor advances by the number of clips examined,
/// terminal clip included, so matched clips are never re-examined.
///
/// # Errors
///
/// Returns [`Error::UnsortedTimeline`] if either timeline is not in
/// non-decreasing start order.
pub fn reconcile(
    clips: &[Interval],
    groups: &[Interval],
    policy: CursorPolicy,
) -> Result<ValidationReport> {
    ensure_sorted(clips, "clip")?;
    ensure_sorted(groups, "group")?;

    let mut checks = Vec::with_capacity(groups.len());
    let mut examined_total = 0;
    let mut cursor = 0;

    for (index, group) in groups.iter().enumerate() {
        let mut start_found = false;
        let mut end_found = false;
        let mut examined = 0;

        for clip in &clips[cursor..] {
            examined += 1;
            if group.start_ms() == clip.start_ms() {
                start_found = true;
            }
            if group.end_ms() == clip.end_ms() {
                end_found = true;
                break;
            }
            if group.start_ms() < clip.start_ms() && group.end_ms() < clip.end_ms() {
                // The clip timeline has moved past where this group's end
                // could still appear.
                break;
            }
        }

        let check = GroupCheck {
            index,
            start_found,
            end_found,
            examined,
        };
        if check.matched() || policy == CursorPolicy::ConsumeOnFailure {
            cursor += examined;
        }
        examined_total += examined;
        checks.push(check);
    }

    Ok(ValidationReport {
        groups: checks,
        examined_total,
    })
}

/// Fail fast if a timeline is not in non-decreasing start order.
fn ensure_sorted(timeline: &[Interval], name: &'static str) -> Result<()> {
    for (index, pair) in timeline.windows(2).enumerate() {
        if pair[1].start_ms() < pair[0].start_ms() {
            return Err(Error::UnsortedTimeline {
                timeline: name,
                index: index + 1,
            });
        }
    }
    Ok(())
}
