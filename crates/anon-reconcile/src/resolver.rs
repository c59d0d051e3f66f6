//! Position resolution: binds each placeholder token in the canonical text to
//! the detection record representing that specific occurrence.
//!
//! Placeholder strings are not unique identifiers; only the tuple
//! (placeholder string, its ordinal among same-string tokens) is. The k-th
//! physical occurrence of string `P` therefore binds to the k-th detection
//! in array order whose replacement equals `P`, not to the k-th detection
//! by occurrence index, since detections for the same `P` may be interleaved
//! with others in the array.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use anon_core::constants::PLACEHOLDER_GRAMMAR;
use anon_core::models::{Detection, Message, Span, SpanKind};

static PLACEHOLDER_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(PLACEHOLDER_GRAMMAR).ok());

/// One physical placeholder token and the detection it resolves to, if any.
/// `detection` is `None` when more tokens of this string exist than
/// detections for it: those trailing tokens render as inert literal text.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenBinding {
    pub start: usize,
    pub end: usize,
    pub detection: Option<usize>,
}

/// Scan `text` left to right and bind every placeholder token to its
/// detection per the positional rule above.
pub fn bind_tokens(text: &str, detections: &[Detection]) -> Vec<TokenBinding> {
    let Some(re) = PLACEHOLDER_RE.as_ref() else {
        return Vec::new();
    };

    // Detection array positions per distinct placeholder string, in array order.
    let mut by_replacement: HashMap<&str, Vec<usize>> = HashMap::new();
    for (idx, det) in detections.iter().enumerate() {
        by_replacement
            .entry(det.replacement.as_str())
            .or_default()
            .push(idx);
    }

    // Running ordinal per distinct placeholder string.
    let mut seen: HashMap<&str, usize> = HashMap::new();
    let mut bindings = Vec::new();
    for m in re.find_iter(text) {
        let token = m.as_str();
        let ordinal = seen.entry(token).or_insert(0);
        let detection = by_replacement
            .get(token)
            .and_then(|indices| indices.get(*ordinal))
            .copied();
        *ordinal += 1;
        bindings.push(TokenBinding {
            start: m.start(),
            end: m.end(),
            detection,
        });
    }
    bindings
}

/// Byte offset of each detection's token in `text`, keyed by array position.
/// Detections whose placeholder has fewer physical tokens than records are
/// absent from the map.
pub fn placeholder_offsets(text: &str, detections: &[Detection]) -> HashMap<usize, usize> {
    bind_tokens(text, detections)
        .into_iter()
        .filter_map(|b| b.detection.map(|idx| (idx, b.start)))
        .collect()
}

/// Full span list for the rendering layer: text segments and placeholder
/// tokens, each token tagged active/inactive and linked to its detection.
/// Concatenating the span slices reproduces the canonical text exactly.
pub fn resolve_spans(message: &Message) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut cursor = 0;
    for binding in bind_tokens(&message.content, &message.detections) {
        if binding.start > cursor {
            spans.push(Span {
                start: cursor,
                end: binding.start,
                kind: SpanKind::Text,
            });
        }
        let kind = match binding.detection {
            Some(idx) => SpanKind::Placeholder {
                detection: idx,
                active: message.is_active(idx),
            },
            None => SpanKind::Literal,
        };
        spans.push(Span {
            start: binding.start,
            end: binding.end,
            kind,
        });
        cursor = binding.end;
    }
    if cursor < message.content.len() {
        spans.push(Span {
            start: cursor,
            end: message.content.len(),
            kind: SpanKind::Text,
        });
    }
    spans
}
