use metabridge_types::Guid;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use uuid::Uuid;

// ── Construction & conversion ────────────────────────────────────

#[test]
fn fresh_guids_are_distinct() {
    assert_ne!(Guid::new(), Guid::new());
}

#[test]
fn from_uuid_preserves_the_uuid() {
    let uuid = Uuid::new_v4();
    let guid = Guid::from_uuid(uuid);
    assert_eq!(guid.as_uuid(), uuid);
}

#[test]
fn parse_accepts_canonical_form() {
    let guid = Guid::parse("67e55044-10b1-426f-9247-bb680e5fe0c8").unwrap();
    assert_eq!(guid.to_string(), "67e55044-10b1-426f-9247-bb680e5fe0c8");
}

#[test]
fn parse_rejects_garbage() {
    assert!(Guid::parse("not-a-guid").is_err());
    assert!("".parse::<Guid>().is_err());
}

// ── Serde ────────────────────────────────────────────────────────

#[test]
fn serializes_as_a_bare_string() {
    let guid = Guid::parse("67e55044-10b1-426f-9247-bb680e5fe0c8").unwrap();
    let json = serde_json::to_string(&guid).unwrap();
    assert_eq!(json, "\"67e55044-10b1-426f-9247-bb680e5fe0c8\"");

    let parsed: Guid = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, guid);
}

// ── Properties ───────────────────────────────────────────────────

proptest! {
    #[test]
    fn display_and_from_str_roundtrip(bytes in any::<[u8; 16]>()) {
        let guid = Guid::from_uuid(Uuid::from_bytes(bytes));
        let parsed: Guid = guid.to_string().parse().unwrap();
        prop_assert_eq!(parsed, guid);
    }
}
