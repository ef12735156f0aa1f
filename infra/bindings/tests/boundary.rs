use ophub_bindings::{BindingError, HostOptions, StringSet, join, split};
use proptest::prelude::*;
use serde_json::json;

fn host() -> HostOptions {
    HostOptions::new(ophub::response_options().expect("defaults must build"))
}

proptest! {
    #[test]
    fn split_then_join_is_canonical(tags in prop::collection::btree_set("[a-z]{1,8}", 0..8)) {
        let joined = join(&tags, ',');
        prop_assert_eq!(split(&joined, ','), tags);
    }

    #[test]
    fn split_never_yields_empty_items(raw in "[a-z,]{0,32}") {
        prop_assert!(split(&raw, ',').iter().all(|item| !item.is_empty()));
    }

    #[test]
    fn string_set_text_form_is_stable(raw in "[a-z,]{0,32}") {
        let once = StringSet::from_delimited(&raw).to_string();
        let twice = StringSet::from_delimited(&once).to_string();
        prop_assert_eq!(once, twice);
    }
}

#[test]
fn every_listed_flag_is_readable() {
    let host = host();
    for (name, default) in host.list_flags() {
        assert_eq!(host.get(&name).unwrap(), default, "{name}");
    }
}

#[test]
fn extension_flags_round_trip_through_host_values() {
    let mut host = host();
    host.set("quality_threshold", json!(0.25)).unwrap();
    host.set("segment_max_length", json!(64)).unwrap();
    host.set("html_preserve_whitespace", json!(true)).unwrap();

    assert_eq!(host.get("quality_threshold").unwrap(), json!(0.25));
    assert_eq!(host.get("segment_max_length").unwrap(), json!(64));
    assert!(host.options().feature_flag::<bool>("html_preserve_whitespace").unwrap());
}

#[test]
fn registry_errors_pass_through() {
    let mut host = host();

    let err = host.set("no_such_flag", json!(1)).unwrap_err();
    assert!(matches!(err, BindingError::Registry { .. }));
    assert_eq!(err.code(), 1);

    let err = host.set("segment_max_length", json!("long")).unwrap_err();
    assert_eq!(err.code(), 2);
    assert_eq!(host.get("segment_max_length").unwrap(), json!(128));
}

#[test]
fn field_names_are_not_extension_flags() {
    let host = host();
    let flags = host.list_flags();
    assert!(!flags.contains_key("qualityScores"));
    assert!(host.names().iter().any(|name| name == "qualityScores"));
}
