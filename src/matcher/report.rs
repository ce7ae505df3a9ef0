//! Reconciliation report types.

use serde::Serialize;

/// Outcome of one group's boundary scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GroupCheck {
    /// Zero-based index of the group in the group timeline.
    pub index: usize,
    /// Whether the group's start matched a clip start.
    pub start_found: bool,
    /// Whether the group's end matched a clip end.
    pub end_found: bool,
    /// Clips examined by this group's scan.
    pub examined: usize,
}

impl GroupCheck {
    /// Whether both boundaries were found.
    #[must_use]
    pub const fn matched(self) -> bool {
        self.start_found && self.end_found
    }
}

/// Itemized result of a reconciliation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    /// Per-group outcomes, in group order.
    pub groups: Vec<GroupCheck>,
    /// Clips examined across the whole call. Bounded by
    /// `clips.len() + groups.len()` thanks to the shared cursor.
    pub examined_total: usize,
}

impl ValidationReport {
    /// True iff every group matched both boundaries.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.groups.iter().all(|check| check.matched())
    }

    /// Indices of the groups that failed, in order.
    #[must_use]
    pub fn failed_indices(&self) -> Vec<usize> {
        self.groups
            .iter()
            .filter(|check| !check.matched())
            .map(|check| check.index)
            .collect()
    }
}
