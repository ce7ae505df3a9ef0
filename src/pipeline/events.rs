//! Structured progress events.
//!
//! The pipeline reports each validation and slicing step as one event;
//! how events are rendered is the caller's concern. The two sinks here
//! cover the CLI's needs: human-readable log lines and NDJSON on stdout.

use serde::Serialize;

/// Pipeline stage an event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    /// Timeline reconciliation.
    Validate,
    /// Segment extraction.
    Slice,
}

/// One step of pipeline progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgressEvent {
    /// Stage this event belongs to.
    pub stage: Stage,
    /// Zero-based step index within the stage.
    pub index: usize,
    /// Total steps in the stage.
    pub total: usize,
    /// Whether the step succeeded.
    pub ok: bool,
    /// Step detail: failure description, or the written path for a
    /// successful slice.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// Receives pipeline progress events.
pub trait EventSink {
    /// Handle one event. Events arrive in step order within each stage.
    fn emit(&mut self, event: &ProgressEvent);
}

/// Renders events as log lines via `tracing`.
#[derive(Debug, Default)]
pub struct LogSink;

impl EventSink for LogSink {
    fn emit(&mut self, event: &ProgressEvent) {
        let step = event.index + 1;
        let total = event.total;
        match (event.stage, event.ok) {
            (Stage::Validate, true) => tracing::info!("Checking {step}/{total} OK"),
            (Stage::Validate, false) => tracing::warn!(
                "Checking {step}/{total} FAILED ({})",
                event.detail.as_deref().unwrap_or("no detail")
            ),
            (Stage::Slice, true) => tracing::info!("Dividing {step}/{total} OK"),
            (Stage::Slice, false) => tracing::warn!(
                "Dividing {step}/{total} FAILED ({})",
                event.detail.as_deref().unwrap_or("no detail")
            ),
        }
    }
}

/// Emits events as NDJSON lines on stdout.
#[derive(Debug, Default)]
pub struct JsonSink;

impl EventSink for JsonSink {
    fn emit(&mut self, event: &ProgressEvent) {
        if let Ok(line) = serde_json::to_string(event) {
            println!("{line}");
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_event_serialization_shape() {
        let event = ProgressEvent {
            stage: Stage::Slice,
            index: 1,
            total: 4,
            ok: true,
            detail: None,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, r#"{"stage":"slice","index":1,"total":4,"ok":true}"#);
    }

    #[test]
    fn test_failure_detail_is_included() {
        let event = ProgressEvent {
            stage: Stage::Validate,
            index: 0,
            total: 2,
            ok: false,
            detail: Some("start false end true".to_string()),
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains(r#""stage":"validate""#));
        assert!(json.contains("start false end true"));
    }
}
