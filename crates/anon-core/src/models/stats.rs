use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Aggregate redaction counters for one message, consumed by the export layer.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RedactionStats {
    pub total: usize,
    pub active: usize,
    pub inactive: usize,
    /// Detection count per entity kind.
    pub by_kind: BTreeMap<String, usize>,
    /// Mean detector confidence, absent when there are no detections.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_confidence: Option<f64>,
}
