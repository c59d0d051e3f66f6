use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::Detection;

/// Lifecycle of one message. A message is created when streaming starts and
/// is marked failed if the transport delivers a terminal error event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum MessageStatus {
    Streaming,
    Complete,
    Failed { error: String },
}

/// One redacted message: the canonical text with placeholder tokens, its
/// ordered detection records, and the user-toggled visibility state.
///
/// The message exclusively owns its detection array and inactive set; no
/// detection is shared across messages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Message {
    pub id: String,
    /// Canonical text including placeholder tokens. The unredacted source
    /// text is never stored in full; it is only recoverable via detections'
    /// `original` fields.
    pub content: String,
    /// Invariant: `detections[k].index == k` for all k.
    pub detections: Vec<Detection>,
    /// Occurrence indices currently showing their original text instead of
    /// the placeholder. Default: empty (all occurrences redacted).
    pub inactive: HashSet<usize>,
    /// Model reasoning captured during streaming, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thinking: Option<String>,
    pub status: MessageStatus,
}

impl Message {
    pub fn new(id: impl Into<String>, content: impl Into<String>, detections: Vec<Detection>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            detections,
            inactive: HashSet::new(),
            thinking: None,
            status: MessageStatus::Complete,
        }
    }

    /// Number of occurrences currently shown as placeholders.
    pub fn active_count(&self) -> usize {
        self.detections.len().saturating_sub(self.inactive.len())
    }

    /// Number of occurrences currently showing their original text.
    pub fn inactive_count(&self) -> usize {
        self.inactive.len()
    }

    /// Whether the occurrence at `index` is shown as a placeholder.
    pub fn is_active(&self, index: usize) -> bool {
        !self.inactive.contains(&index)
    }
}
