//! Ingestion boundary: parses raw chunk payloads and coerces loosely-typed
//! detection records into strict [`Detection`]s.
//!
//! Records missing a required field are rejected and tracked rather than
//! propagated; a rejected record degrades one detection, never the stream.

use serde_json::Value;

use anon_core::constants::DEFAULT_CONFIDENCE;
use anon_core::errors::StreamError;
use anon_core::models::{Detection, StreamEvent};

/// Detection records rejected at the boundary, kept for auditing.
#[derive(Debug, Clone, Default)]
pub struct IngestReport {
    rejected: Vec<RejectedRecord>,
}

#[derive(Debug, Clone)]
pub struct RejectedRecord {
    pub reason: String,
    pub payload: Value,
}

impl IngestReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_rejection(&mut self, reason: impl Into<String>, payload: Value) {
        self.rejected.push(RejectedRecord {
            reason: reason.into(),
            payload,
        });
    }

    pub fn has_rejections(&self) -> bool {
        !self.rejected.is_empty()
    }

    pub fn rejections(&self) -> &[RejectedRecord] {
        &self.rejected
    }
}

/// Parse one raw chunk payload into a typed event.
pub fn parse_event(raw: &str) -> Result<StreamEvent, StreamError> {
    serde_json::from_str(raw).map_err(|e| StreamError::MalformedEvent {
        reason: e.to_string(),
    })
}

/// Coerce loosely-typed detection payloads into strict records, reassigning
/// occurrence indices `0..N-1` in arrival order. Rejections go to `report`.
pub fn coerce_detections(values: &[Value], report: &mut IngestReport) -> Vec<Detection> {
    let mut detections = Vec::with_capacity(values.len());
    for value in values {
        match coerce_one(value, detections.len()) {
            Ok(det) => detections.push(det),
            Err(reason) => {
                tracing::warn!(%reason, "rejected detection record at ingestion");
                report.record_rejection(reason, value.clone());
            }
        }
    }
    detections
}

fn coerce_one(value: &Value, index: usize) -> Result<Detection, String> {
    let obj = value
        .as_object()
        .ok_or_else(|| "detection record is not an object".to_string())?;

    let kind = required_str(obj, "type")?;
    let original = required_str(obj, "original")?;
    let replacement = required_str(obj, "replacement")?;

    let confidence = obj
        .get("confidence")
        .and_then(Value::as_f64)
        .unwrap_or(DEFAULT_CONFIDENCE)
        .clamp(0.0, 1.0);

    let mut det = Detection::new(kind, original, replacement, confidence, index);
    if let Some(explanation) = obj.get("explanation").and_then(Value::as_str) {
        det = det.with_explanation(explanation);
    }
    Ok(det)
}

fn required_str(
    obj: &serde_json::Map<String, Value>,
    field: &str,
) -> Result<String, String> {
    match obj.get(field).and_then(Value::as_str) {
        Some(s) if !s.is_empty() => Ok(s.to_string()),
        Some(_) => Err(format!("field '{field}' is empty")),
        None => Err(format!("missing required field '{field}'")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn valid_record_coerces() {
        let mut report = IngestReport::new();
        let records = vec![json!({
            "type": "name",
            "original": "Ann Lee",
            "replacement": "[NAME_1]",
            "confidence": 0.9,
            "explanation": "person name"
        })];
        let detections = coerce_detections(&records, &mut report);
        assert_eq!(detections.len(), 1);
        assert_eq!(detections[0].kind, "name");
        assert!(!report.has_rejections());
    }

    #[test]
    fn missing_replacement_is_rejected() {
        let mut report = IngestReport::new();
        let records = vec![json!({"type": "name", "original": "Ann"})];
        let detections = coerce_detections(&records, &mut report);
        assert!(detections.is_empty());
        assert_eq!(report.rejections().len(), 1);
        assert!(report.rejections()[0].reason.contains("replacement"));
    }

    #[test]
    fn out_of_range_confidence_is_clamped() {
        let mut report = IngestReport::new();
        let records = vec![json!({
            "type": "name", "original": "Ann", "replacement": "[NAME_1]",
            "confidence": 3.2
        })];
        let detections = coerce_detections(&records, &mut report);
        assert_eq!(detections[0].confidence, 1.0);
    }
}
