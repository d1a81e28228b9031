use std::collections::HashSet;

use vwo_rust::utils::get_visitor_uuid;

#[test]
fn test_derivation_is_idempotent() {
    for _ in 0..10 {
        assert_eq!(
            get_visitor_uuid("Ashley", 60_781),
            get_visitor_uuid("Ashley", 60_781)
        );
    }
}

#[test]
fn test_distinct_pairs_yield_distinct_ids() {
    let users = ["Ashley", "Bill", "Chris", "Dominic", "Emma"];
    let accounts = [1u64, 10, 60_781, 123_456];

    let mut seen = HashSet::new();
    for user in users {
        for account in accounts {
            assert!(seen.insert(get_visitor_uuid(user, account)));
        }
    }
}

#[test]
fn test_identifier_is_wire_safe() {
    let uuid = get_visitor_uuid("user with spaces & symbols!", 60_781);
    assert_eq!(uuid.len(), 32);
    assert!(uuid.chars().all(|c| c.is_ascii_hexdigit()));
}
