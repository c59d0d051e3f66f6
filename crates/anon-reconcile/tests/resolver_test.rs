use anon_core::models::{Detection, Message, SpanKind};
use anon_reconcile::resolver::{bind_tokens, placeholder_offsets, resolve_spans};

fn message(content: &str, detections: Vec<Detection>) -> Message {
    Message::new("m1", content, detections)
}

// ── Positional binding ────────────────────────────────────────────────────

#[test]
fn binds_each_token_to_its_detection() {
    let msg = message(
        "Contact [NAME_1] at [EMAIL].",
        vec![
            Detection::new("name", "John Smith", "[NAME_1]", 0.95, 0),
            Detection::new("email", "j@x.com", "[EMAIL]", 0.99, 1),
        ],
    );
    let bindings = bind_tokens(&msg.content, &msg.detections);
    assert_eq!(bindings.len(), 2);
    assert_eq!(bindings[0].detection, Some(0));
    assert_eq!(bindings[1].detection, Some(1));
    assert_eq!(&msg.content[bindings[0].start..bindings[0].end], "[NAME_1]");
    assert_eq!(&msg.content[bindings[1].start..bindings[1].end], "[EMAIL]");
}

#[test]
fn interleaved_same_string_detections_bind_by_relative_order() {
    // Two [ORG_1] occurrences interleaved with a [NAME_1]: the k-th [ORG_1]
    // token binds to the k-th detection whose replacement is [ORG_1], not to
    // the k-th detection overall.
    let msg = message(
        "[ORG_1] hired [NAME_1] from [ORG_1].",
        vec![
            Detection::new("org", "Acme Corp", "[ORG_1]", 0.9, 0),
            Detection::new("name", "Ann Lee", "[NAME_1]", 0.9, 1),
            Detection::new("org", "Acme Corp", "[ORG_1]", 0.9, 2),
        ],
    );
    let bindings = bind_tokens(&msg.content, &msg.detections);
    assert_eq!(bindings[0].detection, Some(0));
    assert_eq!(bindings[1].detection, Some(1));
    assert_eq!(bindings[2].detection, Some(2));
}

#[test]
fn offsets_are_keyed_by_array_position() {
    let msg = message(
        "a [X_1] b [Y_1]",
        vec![
            Detection::new("id", "7", "[X_1]", 0.8, 0),
            Detection::new("id", "9", "[Y_1]", 0.8, 1),
        ],
    );
    let offsets = placeholder_offsets(&msg.content, &msg.detections);
    assert_eq!(offsets.get(&0), Some(&2));
    assert_eq!(offsets.get(&1), Some(&10));
}

// ── Degradation ───────────────────────────────────────────────────────────

#[test]
fn excess_tokens_become_literal_spans() {
    let msg = message(
        "[NAME_1] and [NAME_1]",
        vec![Detection::new("name", "Ann", "[NAME_1]", 0.9, 0)],
    );
    let spans = resolve_spans(&msg);
    let kinds: Vec<&SpanKind> = spans.iter().map(|s| &s.kind).collect();
    assert!(matches!(kinds[0], SpanKind::Placeholder { detection: 0, .. }));
    assert!(matches!(kinds[2], SpanKind::Literal));
}

#[test]
fn excess_detections_are_simply_unrendered() {
    let msg = message(
        "only [NAME_1] here",
        vec![
            Detection::new("name", "Ann", "[NAME_1]", 0.9, 0),
            Detection::new("name", "Ann", "[NAME_1]", 0.9, 1),
        ],
    );
    let spans = resolve_spans(&msg);
    let placeholders = spans.iter().filter(|s| s.is_placeholder()).count();
    assert_eq!(placeholders, 1);
}

// ── Identity round-trip ───────────────────────────────────────────────────

#[test]
fn span_concatenation_reproduces_text_exactly() {
    let msg = message(
        "Contact [NAME_1] at [EMAIL]. Ref [ID_2], plain [note].",
        vec![
            Detection::new("name", "John Smith", "[NAME_1]", 0.95, 0),
            Detection::new("email", "j@x.com", "[EMAIL]", 0.99, 1),
            Detection::new("id", "A-17", "[ID_2]", 0.7, 2),
        ],
    );
    let spans = resolve_spans(&msg);
    let rebuilt: String = spans
        .iter()
        .map(|s| &msg.content[s.start..s.end])
        .collect();
    assert_eq!(rebuilt, msg.content);
}

#[test]
fn spans_carry_activation_state() {
    let mut msg = message(
        "[NAME_1] at [EMAIL]",
        vec![
            Detection::new("name", "Ann", "[NAME_1]", 0.9, 0),
            Detection::new("email", "a@x.com", "[EMAIL]", 0.9, 1),
        ],
    );
    msg.inactive.insert(0);
    let spans = resolve_spans(&msg);
    assert_eq!(
        spans[0].kind,
        SpanKind::Placeholder {
            detection: 0,
            active: false
        }
    );
    assert_eq!(
        spans[2].kind,
        SpanKind::Placeholder {
            detection: 1,
            active: true
        }
    );
}

#[test]
fn empty_text_yields_no_spans() {
    let msg = message("", vec![]);
    assert!(resolve_spans(&msg).is_empty());
}
