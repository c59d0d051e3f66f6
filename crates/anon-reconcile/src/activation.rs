//! Occurrence activation state: which redactions currently show their
//! original text instead of the placeholder.
//!
//! Default: every occurrence active (placeholder shown). Deactivating index
//! `k` means "show the original of the detection with occurrence index `k`".
//! All operations return a new message snapshot.

use anon_core::models::Message;

/// Toggle a single occurrence. Out-of-range indices are ignored.
pub fn toggle_occurrence(message: &Message, index: usize, active: bool) -> Message {
    let mut next = message.clone();
    if active {
        next.inactive.remove(&index);
    } else if index < next.detections.len() {
        next.inactive.insert(index);
    }
    tracing::debug!(
        message_id = %next.id,
        index,
        active,
        "toggled occurrence"
    );
    next
}

/// Toggle every occurrence whose detection carries this placeholder string.
pub fn toggle_placeholder(message: &Message, replacement: &str, active: bool) -> Message {
    let mut next = message.clone();
    let mut touched = 0;
    for (idx, det) in next.detections.iter().enumerate() {
        if det.replacement == replacement {
            if active {
                next.inactive.remove(&idx);
            } else {
                next.inactive.insert(idx);
            }
            touched += 1;
        }
    }
    tracing::debug!(
        message_id = %next.id,
        replacement,
        active,
        touched,
        "toggled placeholder"
    );
    next
}

/// Toggle every occurrence of one entity: all detections sharing this
/// `original` value, regardless of placeholder.
pub fn toggle_entity(message: &Message, original: &str, active: bool) -> Message {
    let mut next = message.clone();
    let mut touched = 0;
    for (idx, det) in next.detections.iter().enumerate() {
        if det.original == original {
            if active {
                next.inactive.remove(&idx);
            } else {
                next.inactive.insert(idx);
            }
            touched += 1;
        }
    }
    tracing::debug!(
        message_id = %next.id,
        original,
        active,
        touched,
        "toggled entity"
    );
    next
}

/// Reset the inactive set, then deactivate every detection whose confidence
/// (as a percentage) falls below `threshold`.
///
/// This is a full reset-then-apply: invoking it twice with different
/// thresholds never accumulates stale deactivations, and it discards any
/// manual per-occurrence overrides.
pub fn apply_confidence_threshold(message: &Message, threshold: f64) -> Message {
    let mut next = message.clone();
    next.inactive = next
        .detections
        .iter()
        .enumerate()
        .filter(|(_, det)| det.confidence * 100.0 < threshold)
        .map(|(idx, _)| idx)
        .collect();
    tracing::debug!(
        message_id = %next.id,
        threshold,
        deactivated = next.inactive.len(),
        "applied confidence threshold"
    );
    next
}
