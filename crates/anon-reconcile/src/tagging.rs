//! Manual Tagging Engine. Converts a user-selected substring into a
//! detection, inserting it at the correct position in the occurrence order.

use std::collections::HashSet;

use regex::Regex;

use anon_core::constants::{placeholder_prefix, DEFAULT_CONFIDENCE};
use anon_core::errors::ReconcileError;
use anon_core::models::{Detection, Message};

use crate::resolver;

/// Result of a tagging operation.
#[derive(Debug, Clone, PartialEq)]
pub struct TagOutcome {
    pub message: Message,
    /// The placeholder applied, freshly allocated or reused.
    pub placeholder: String,
    /// How many detection records were inserted.
    pub inserted: usize,
}

/// Tag the first textual occurrence of `selection` as entity type `kind`.
///
/// Retagging the same literal with the same type is idempotent: the existing
/// replacement is reused and no second placeholder is ever allocated. When
/// the selection is absent from the text the call is a no-op and reports
/// [`ReconcileError::TargetNotFound`] without mutating anything.
pub fn tag_selection(
    message: &Message,
    selection: &str,
    kind: &str,
) -> Result<TagOutcome, ReconcileError> {
    if selection.is_empty() {
        return Err(ReconcileError::TargetNotFound {
            target: selection.to_string(),
        });
    }
    // Existing placeholder tokens are opaque: a selection match inside one
    // is never a taggable occurrence.
    let token_spans: Vec<(usize, usize)> =
        resolver::bind_tokens(&message.content, &message.detections)
            .into_iter()
            .map(|b| (b.start, b.end))
            .collect();
    let Some(offset) = message
        .content
        .match_indices(selection)
        .map(|(pos, _)| pos)
        .find(|&pos| {
            let end = pos + selection.len();
            !token_spans.iter().any(|&(s, e)| pos < e && end > s)
        })
    else {
        return Err(ReconcileError::TargetNotFound {
            target: selection.to_string(),
        });
    };

    let placeholder = choose_placeholder(&message.content, &message.detections, selection, kind);

    let mut next = message.clone();
    next.content.replace_range(offset..offset + selection.len(), &placeholder);

    // A detection already recording this exact (original, replacement) pair
    // means the record exists; only the text needed updating.
    let already_recorded = next
        .detections
        .iter()
        .any(|d| d.original == selection && d.replacement == placeholder);

    let mut inserted = 0;
    if !already_recorded {
        let detection =
            Detection::new(kind, selection, placeholder.clone(), DEFAULT_CONFIDENCE, 0)
                .with_explanation(format!("Manually tagged as {kind}"));
        insert_in_text_order(&mut next, detection, offset);
        renumber(&mut next.detections);
        inserted = 1;
    }

    tracing::debug!(
        message_id = %next.id,
        %placeholder,
        kind,
        inserted,
        "tagged selection"
    );
    Ok(TagOutcome {
        message: next,
        placeholder,
        inserted,
    })
}

/// Pick the placeholder for `(selection, kind)`: reuse the replacement of an
/// existing detection for the same literal and type, otherwise allocate
/// `[PREFIX_n]` with the smallest positive integer not already used in the
/// text.
pub(crate) fn choose_placeholder(
    text: &str,
    detections: &[Detection],
    selection: &str,
    kind: &str,
) -> String {
    let prefix = placeholder_prefix(kind);
    let family = format!("[{prefix}_");
    if let Some(existing) = detections
        .iter()
        .find(|d| d.original == selection && d.replacement.starts_with(&family))
    {
        return existing.replacement.clone();
    }

    let used = used_numbers(text, prefix);
    let mut n: u32 = 1;
    while used.contains(&n) {
        n += 1;
    }
    format!("[{prefix}_{n}]")
}

/// Integers already allocated for this prefix, collected from `[PREFIX_n]`
/// tokens present in the text.
fn used_numbers(text: &str, prefix: &str) -> HashSet<u32> {
    let pattern = format!(r"\[{}_(\d+)\]", regex::escape(prefix));
    let Ok(re) = Regex::new(&pattern) else {
        return HashSet::new();
    };
    re.captures_iter(text)
        .filter_map(|caps| caps[1].parse().ok())
        .collect()
}

/// Insert `detection`, whose token sits at byte `offset` of the
/// post-replacement text, immediately after the last existing detection
/// whose token occurs at a smaller offset. Returns the insertion index.
/// The caller renumbers afterwards.
pub(crate) fn insert_in_text_order(
    message: &mut Message,
    mut detection: Detection,
    offset: usize,
) -> usize {
    let offsets = resolver::placeholder_offsets(&message.content, &message.detections);
    let mut insert_at = 0;
    for idx in 0..message.detections.len() {
        if offsets.get(&idx).is_some_and(|&o| o < offset) {
            insert_at = idx + 1;
        }
    }
    detection.index = insert_at;
    message.detections.insert(insert_at, detection);

    // Inserting shifts the inactive indices at and above the insertion point.
    message.inactive = message
        .inactive
        .iter()
        .map(|&i| if i >= insert_at { i + 1 } else { i })
        .collect();
    insert_at
}

/// Restore the invariant `index == array position`.
pub(crate) fn renumber(detections: &mut [Detection]) {
    for (idx, det) in detections.iter_mut().enumerate() {
        det.index = idx;
    }
}
