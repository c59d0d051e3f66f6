use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One redaction record: a specific physical placeholder occurrence in the
/// canonical text and the original substring it stands for.
///
/// Replacement values may repeat across detections: two physically distinct
/// occurrences can share the same placeholder label. The occurrence-to-record
/// correspondence is resolved positionally by the resolver, never by value
/// equality alone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Detection {
    /// Entity kind as reported by the detector or the user (`name`, `email`, ...).
    #[serde(rename = "type")]
    pub kind: String,
    /// The source substring this occurrence redacts.
    pub original: String,
    /// Placeholder token standing in for it, e.g. `[NAME_1]`.
    pub replacement: String,
    /// Detector confidence in `[0, 1]`.
    pub confidence: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    /// Occurrence index: zero-based left-to-right position among all
    /// detections of the message. Invariant: equals the array position.
    #[serde(rename = "i")]
    pub index: usize,
}

impl Detection {
    pub fn new(
        kind: impl Into<String>,
        original: impl Into<String>,
        replacement: impl Into<String>,
        confidence: f64,
        index: usize,
    ) -> Self {
        Self {
            kind: kind.into(),
            original: original.into(),
            replacement: replacement.into(),
            confidence,
            explanation: None,
            index,
        }
    }

    pub fn with_explanation(mut self, explanation: impl Into<String>) -> Self {
        self.explanation = Some(explanation.into());
        self
    }
}
