use ophub_domain::features::AuxOutputs;

#[test]
fn alignment_pulls_in_sentence_mappings() {
    let outputs = AuxOutputs::ALIGNMENT.normalized();
    assert!(outputs.contains(AuxOutputs::SENTENCE_MAPPINGS));

    let outputs = AuxOutputs::QUALITY_SCORES.normalized();
    assert_eq!(outputs, AuxOutputs::QUALITY_SCORES);
}

#[test]
fn normalizing_twice_changes_nothing() {
    let outputs = (AuxOutputs::ALIGNMENT | AuxOutputs::HTML).normalized();
    assert_eq!(outputs.normalized(), outputs);
    assert_eq!(AuxOutputs::empty().normalized(), AuxOutputs::empty());
}
