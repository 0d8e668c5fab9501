use shopsecure_types::{CartItemId, ProductId, ReviewId, UserId};

// ── Construction ─────────────────────────────────────────────────

#[test]
fn new_wraps_raw_id() {
    let id = ProductId::new(7);
    assert_eq!(id.as_i64(), 7);
}

#[test]
fn from_i64() {
    let id: CartItemId = 42.into();
    assert_eq!(id.as_i64(), 42);
}

// ── Display / FromStr ────────────────────────────────────────────

#[test]
fn display_is_plain_integer() {
    assert_eq!(ReviewId::new(12).to_string(), "12");
}

#[test]
fn parses_from_string() {
    let id: UserId = "99".parse().unwrap();
    assert_eq!(id, UserId::new(99));
}

#[test]
fn rejects_non_integer() {
    assert!("abc".parse::<ProductId>().is_err());
    assert!("".parse::<ProductId>().is_err());
}

// ── Serde ────────────────────────────────────────────────────────

#[test]
fn serializes_transparently() {
    let json = serde_json::to_string(&ProductId::new(3)).unwrap();
    assert_eq!(json, "3");
}

#[test]
fn deserializes_from_bare_integer() {
    let id: ProductId = serde_json::from_str("3").unwrap();
    assert_eq!(id, ProductId::new(3));
}

// ── Type distinctness ────────────────────────────────────────────

#[test]
fn ids_are_hashable() {
    use std::collections::HashSet;
    let mut set = HashSet::new();
    set.insert(ProductId::new(1));
    set.insert(ProductId::new(1));
    assert_eq!(set.len(), 1);
}
