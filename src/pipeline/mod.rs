//! Split pipeline.
//!
//! Wires the collaborators together: session export in, validation
//! report and WAV segments out. The CLI layer stays a thin adapter over
//! [`run_split`].

mod coordinator;
mod events;
mod progress;

pub use coordinator::{SplitOptions, SplitSummary, run_split};
pub use events::{EventSink, JsonSink, LogSink, ProgressEvent, Stage};
