use anon_core::errors::ReconcileError;
use anon_core::models::{Detection, Message};
use anon_reconcile::tagging::tag_selection;

fn message(content: &str, detections: Vec<Detection>) -> Message {
    Message::new("m1", content, detections)
}

#[test]
fn tags_first_occurrence_only() {
    let msg = message("Acme hired Acme again", vec![]);
    let outcome = tag_selection(&msg, "Acme", "org").unwrap();
    assert_eq!(outcome.message.content, "[ORG_1] hired Acme again");
    assert_eq!(outcome.placeholder, "[ORG_1]");
    assert_eq!(outcome.inserted, 1);
}

#[test]
fn matches_inside_existing_tokens_are_not_tagged() {
    // "SSN" first appears inside the [SSN_1] token; splicing there would
    // corrupt the token. The free-standing occurrence is the one tagged.
    let msg = message(
        "Your [SSN_1] and SSN records",
        vec![Detection::new("ssn", "555-1234", "[SSN_1]", 0.9, 0)],
    );
    let outcome = tag_selection(&msg, "SSN", "ssn").unwrap();
    assert_eq!(outcome.message.content, "Your [SSN_1] and [SSN_2] records");
    assert_eq!(outcome.message.detections.len(), 2);
    assert_eq!(outcome.message.detections[1].original, "SSN");
}

#[test]
fn selection_only_inside_a_token_is_not_found() {
    let msg = message(
        "Your [SSN_1] records",
        vec![Detection::new("ssn", "555-1234", "[SSN_1]", 0.9, 0)],
    );
    assert!(tag_selection(&msg, "SSN", "ssn").is_err());
}

#[test]
fn new_detection_lands_at_its_text_position() {
    let msg = message(
        "Contact [NAME_1] at [EMAIL]. Call 555-1234.",
        vec![
            Detection::new("name", "John Smith", "[NAME_1]", 0.95, 0),
            Detection::new("email", "j@x.com", "[EMAIL]", 0.99, 1),
        ],
    );
    let outcome = tag_selection(&msg, "555-1234", "ssn").unwrap();
    let updated = &outcome.message;
    assert_eq!(
        updated.content,
        "Contact [NAME_1] at [EMAIL]. Call [SSN_1]."
    );
    assert_eq!(updated.detections.len(), 3);
    assert_eq!(updated.detections[2].kind, "ssn");
    assert_eq!(updated.detections[2].original, "555-1234");
    assert_eq!(updated.detections[2].replacement, "[SSN_1]");
    assert_eq!(updated.detections[2].index, 2);
    // Existing records untouched.
    assert_eq!(updated.detections[0].index, 0);
    assert_eq!(updated.detections[1].index, 1);
}

#[test]
fn insertion_before_existing_detections_renumbers_the_tail() {
    let msg = message(
        "The CEO met [NAME_1] at [EMAIL].",
        vec![
            Detection::new("name", "John Smith", "[NAME_1]", 0.95, 0),
            Detection::new("email", "j@x.com", "[EMAIL]", 0.99, 1),
        ],
    );
    let outcome = tag_selection(&msg, "CEO", "name").unwrap();
    let updated = &outcome.message;
    assert_eq!(updated.content, "The [NAME_2] met [NAME_1] at [EMAIL].");
    assert_eq!(updated.detections[0].original, "CEO");
    let indices: Vec<usize> = updated.detections.iter().map(|d| d.index).collect();
    assert_eq!(indices, vec![0, 1, 2]);
}

#[test]
fn insertion_shifts_inactive_indices() {
    let mut msg = message(
        "The CEO met [NAME_1].",
        vec![Detection::new("name", "John Smith", "[NAME_1]", 0.95, 0)],
    );
    msg.inactive.insert(0);
    let outcome = tag_selection(&msg, "CEO", "name").unwrap();
    // John Smith's occurrence moved from index 0 to 1; the deactivation
    // follows it.
    assert!(outcome.message.is_active(0));
    assert!(!outcome.message.is_active(1));
}

#[test]
fn retagging_same_literal_reuses_the_placeholder() {
    let msg = message("Acme and Acme", vec![]);
    let first = tag_selection(&msg, "Acme", "org").unwrap();
    assert_eq!(first.message.content, "[ORG_1] and Acme");

    // Tagging the remaining occurrence of the same literal with the same
    // type reuses [ORG_1]; no second placeholder, no second record.
    let second = tag_selection(&first.message, "Acme", "org").unwrap();
    assert_eq!(second.message.content, "[ORG_1] and [ORG_1]");
    assert_eq!(second.placeholder, "[ORG_1]");
    assert_eq!(second.inserted, 0);
    assert_eq!(second.message.detections.len(), 1);
}

#[test]
fn repeating_with_identical_inputs_is_idempotent() {
    let msg = message("Reach me at 555-1234 today", vec![]);
    let a = tag_selection(&msg, "555-1234", "ssn").unwrap();
    let b = tag_selection(&msg, "555-1234", "ssn").unwrap();
    assert_eq!(a, b);
    assert_eq!(a.message.detections.len(), 1);
}

#[test]
fn placeholder_numbering_skips_used_integers() {
    let msg = message(
        "[ORG_1] sued [ORG_2]; NewCo watched.",
        vec![
            Detection::new("org", "Acme", "[ORG_1]", 0.9, 0),
            Detection::new("org", "Biz", "[ORG_2]", 0.9, 1),
        ],
    );
    let outcome = tag_selection(&msg, "NewCo", "org").unwrap();
    assert_eq!(outcome.placeholder, "[ORG_3]");
}

#[test]
fn unknown_entity_type_falls_back_to_unknown_prefix() {
    let msg = message("the launch codename Bluebird", vec![]);
    let outcome = tag_selection(&msg, "Bluebird", "codename").unwrap();
    assert_eq!(outcome.placeholder, "[UNKNOWN_1]");
}

#[test]
fn missing_target_is_a_reported_no_op() {
    let msg = message(
        "Contact [NAME_1].",
        vec![Detection::new("name", "Ann", "[NAME_1]", 0.9, 0)],
    );
    let err = tag_selection(&msg, "not here", "name").unwrap_err();
    assert_eq!(
        err,
        ReconcileError::TargetNotFound {
            target: "not here".into()
        }
    );
}

#[test]
fn empty_selection_is_rejected() {
    let msg = message("anything", vec![]);
    assert!(tag_selection(&msg, "", "name").is_err());
}
