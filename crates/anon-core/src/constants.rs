//! Shared constants: placeholder grammar and entity-type tables.

/// Placeholder token grammar: `[` + uppercase letters, digits, underscores + `]`.
/// Matches `[EMAIL]`, `[NAME_1]`, `[BIRTH_DATE]` but not `[note]` or `[1]`.
pub const PLACEHOLDER_GRAMMAR: &str = r"\[[A-Z][A-Z0-9_]*\]";

/// Confidence assigned to detection records that arrive without a score.
pub const DEFAULT_CONFIDENCE: f64 = 0.85;

/// Map an entity type to its placeholder prefix.
///
/// The table mirrors the backend's tag vocabulary; unknown types fall back
/// to `UNKNOWN` rather than failing, so user-defined instructions that
/// introduce new tags still produce a usable placeholder.
pub fn placeholder_prefix(kind: &str) -> &'static str {
    match kind.to_ascii_lowercase().as_str() {
        "name" => "NAME",
        "email" => "EMAIL",
        "phone" => "PHONE",
        "address" => "ADDRESS",
        "ssn" => "SSN",
        "org" => "ORG",
        // Legacy "date" tag maps onto birth-date.
        "birth-date" | "date" => "BIRTH_DATE",
        "id" => "ID",
        "proprietary" => "PROPRIETARY",
        "location" => "LOCATION",
        "product" => "PRODUCT",
        "service" => "SERVICE",
        "project" => "PROJECT",
        _ => "UNKNOWN",
    }
}
