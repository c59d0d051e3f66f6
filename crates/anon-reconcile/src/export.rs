//! Export Reversal. Derives the "effective" text for copy/export: active
//! occurrences stay redacted, inactive occurrences show their original form.

use std::collections::BTreeMap;

use anon_core::models::{ExportSnapshot, Message, RedactionStats};

/// Substitute every inactive occurrence's original text back into a copy of
/// the canonical text.
///
/// Occurrences are processed in descending occurrence-index order and the
/// text is rescanned fresh for each substitution: a substitution changes the
/// text length, which would invalidate the offsets of earlier-position
/// occurrences if they were handled first.
pub fn effective_text(message: &Message) -> String {
    let mut inactive: Vec<usize> = message
        .inactive
        .iter()
        .copied()
        .filter(|&idx| idx < message.detections.len())
        .collect();
    inactive.sort_unstable_by(|a, b| b.cmp(a));

    let mut text = message.content.clone();
    for idx in inactive {
        let det = &message.detections[idx];
        // This occurrence's ordinal among same-replacement detections, the
        // same positional rule the resolver binds tokens with.
        let ordinal = message.detections[..idx]
            .iter()
            .filter(|d| d.replacement == det.replacement)
            .count();
        if let Some(pos) = nth_occurrence(&text, &det.replacement, ordinal) {
            text.replace_range(pos..pos + det.replacement.len(), &det.original);
        }
    }
    text
}

fn nth_occurrence(text: &str, needle: &str, n: usize) -> Option<usize> {
    text.match_indices(needle).nth(n).map(|(pos, _)| pos)
}

/// Aggregate counters for one message.
pub fn stats(message: &Message) -> RedactionStats {
    let mut by_kind: BTreeMap<String, usize> = BTreeMap::new();
    for det in &message.detections {
        *by_kind.entry(det.kind.clone()).or_default() += 1;
    }
    let avg_confidence = if message.detections.is_empty() {
        None
    } else {
        let sum: f64 = message.detections.iter().map(|d| d.confidence).sum();
        Some(sum / message.detections.len() as f64)
    };
    RedactionStats {
        total: message.detections.len(),
        active: message.active_count(),
        inactive: message.inactive_count(),
        by_kind,
        avg_confidence,
    }
}

/// Read-only snapshot for the export layer.
pub fn snapshot(message: &Message) -> ExportSnapshot {
    ExportSnapshot {
        message_id: message.id.clone(),
        text: effective_text(message),
        detections: message.detections.clone(),
        inactive: message.inactive.clone(),
        stats: stats(message),
    }
}
