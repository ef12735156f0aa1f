use ophub_domain::constants::{RESPONSE_FIELDS, SET_DELIMITER, VOID_TAGS};

#[test]
fn response_fields_are_unique_camel_case() {
    let mut seen = std::collections::BTreeSet::new();
    for field in RESPONSE_FIELDS {
        assert!(seen.insert(*field), "duplicate field name: {field}");
        assert!(field.chars().next().is_some_and(char::is_lowercase));
        assert!(!field.contains('_'));
    }
    assert!(RESPONSE_FIELDS.contains(&VOID_TAGS));
    assert_eq!(SET_DELIMITER, ',');
}
