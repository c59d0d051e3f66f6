use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::{Detection, RedactionStats};

/// Read-only snapshot of one message for the export layer. The effective
/// text shows active occurrences redacted and inactive occurrences in their
/// original form; output formatting (CSV/PDF) is entirely outside this core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ExportSnapshot {
    pub message_id: String,
    pub text: String,
    pub detections: Vec<Detection>,
    pub inactive: HashSet<usize>,
    pub stats: RedactionStats,
}
