use ophub_kernel::prelude::*;
use std::collections::BTreeSet;
use std::sync::Arc;

fn foo_bar(registry: &mut OptionRegistry) -> Result<(), RegistryError> {
    registry.set_default("foo", false)?;
    registry.set_default("bar", "hi")
}

fn options() -> ResponseOptions {
    ResponseOptions::new(flag_chain![foo_bar].build_shared().unwrap())
}

#[test]
fn defaults_are_visible_before_any_set() {
    let table = flag_chain![foo_bar].build().unwrap();
    for (name, default) in table.defaults() {
        assert_eq!(table.get(name).ok(), default, "{name}");
    }

    let options = options();
    assert!(!options.feature_flag::<bool>("foo").unwrap());
    assert_eq!(options.feature_flag::<String>("bar").unwrap(), "hi");
}

#[test]
fn undeclared_names_fail_on_read_and_write() {
    let mut table = flag_chain![foo_bar].build().unwrap();
    assert!(matches!(table.get("baz"), Err(RegistryError::UnknownFlag { .. })));
    assert!(matches!(table.set("baz", 1_i64), Err(RegistryError::UnknownFlag { .. })));

    let mut options = options();
    assert!(matches!(options.set_feature_flag("baz", true), Err(RegistryError::UnknownFlag { .. })));
    assert!(matches!(options.feature_flag::<bool>("baz"), Err(RegistryError::UnknownFlag { .. })));
}

#[test]
fn writes_must_match_the_declared_kind() {
    let mut options = options();

    let err = options.set_feature_flag("foo", "true".to_owned()).unwrap_err();
    assert!(matches!(err, RegistryError::TypeMismatch { .. }));
    let err = options.set_feature_flag("bar", 3_i64).unwrap_err();
    assert!(matches!(err, RegistryError::TypeMismatch { .. }));

    options.set_feature_flag("foo", true).unwrap();
    options.set_feature_flag("bar", "bye".to_owned()).unwrap();
    assert!(options.feature_flag::<bool>("foo").unwrap());
    assert_eq!(options.feature_flag::<String>("bar").unwrap(), "bye");
}

#[test]
fn later_declarant_sets_the_default() {
    let a = |r: &mut OptionRegistry| r.set_default("x", 1_i64);
    let b = |r: &mut OptionRegistry| r.set_default("x", 2_i64);

    let table = flag_chain![a, b].build().unwrap();
    assert_eq!(table.get("x").unwrap(), &FlagValue::Int(2));
}

#[test]
fn alignment_brings_sentence_mappings_along() {
    let options = ResponseOptions { alignment: true, sentence_mappings: false, ..options() };

    assert!(options.include_sentence_mappings());
    assert_eq!(options.outputs(), AuxOutputs::ALIGNMENT | AuxOutputs::SENTENCE_MAPPINGS);
}

#[test]
fn available_names_ignore_later_writes() {
    let expected: BTreeSet<String> = ["foo", "bar"].into_iter().map(String::from).collect();

    let mut table = flag_chain![foo_bar].build().unwrap();
    assert_eq!(table.available(), expected);

    table.set("foo", true).unwrap();
    table.set("bar", "bye").unwrap();
    assert_eq!(table.available(), expected);

    let shared = Arc::new(table);
    let mut options = ResponseOptions::new(Arc::clone(&shared));
    options.set_feature_flag("foo", false).unwrap();
    assert_eq!(options.flags.table().available(), expected);
}
