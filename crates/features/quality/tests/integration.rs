use ophub_kernel::prelude::*;
use ophub_quality::{
    AGGREGATION, Aggregation, QualityError, QualityFlags, QualitySettings, THRESHOLD, WORD_SCORES,
};

fn options() -> ResponseOptions {
    ResponseOptions::new(FlagChain::new().with(QualityFlags).build_shared().unwrap())
}

#[test]
fn defaults_produce_settings() {
    let settings = QualitySettings::from_options(&options()).unwrap();
    assert!(!settings.enabled);
    assert!(!settings.word_scores);
    assert!(settings.threshold.abs() < f64::EPSILON);
    assert_eq!(settings.aggregation, Aggregation::Mean);
}

#[test]
fn first_class_field_and_flags_combine() {
    let mut options = options();
    options.quality_scores = true;
    options.set_feature_flag(WORD_SCORES, true).unwrap();
    options.set_feature_flag(AGGREGATION, "min".to_owned()).unwrap();

    let settings = QualitySettings::from_options(&options).unwrap();
    assert!(settings.enabled);
    assert!(settings.word_scores);
    assert_eq!(settings.aggregation, Aggregation::Min);
}

#[test]
fn threshold_must_be_a_probability() {
    let mut options = options();
    options.set_feature_flag(THRESHOLD, 1.5).unwrap();
    assert!(matches!(
        QualitySettings::from_options(&options),
        Err(QualityError::ThresholdOutOfRange { .. })
    ));
}

#[test]
fn threshold_rejects_integer_writes() {
    let mut options = options();
    let err = options.set_feature_flag(THRESHOLD, 1_i64).unwrap_err();
    assert_eq!(err.code(), 2);
}

#[test]
fn unknown_aggregation_is_rejected() {
    let mut options = options();
    options.set_feature_flag(AGGREGATION, "median".to_owned()).unwrap();
    let err = QualitySettings::from_options(&options).unwrap_err();
    assert_eq!(err.to_string(), "Unknown score aggregation: 'median'");
}

#[test]
fn every_aggregation_parses_from_its_name() {
    for aggregation in Aggregation::ALL {
        assert_eq!(aggregation.as_str().parse(), Ok(aggregation));
    }
    assert_eq!("MEAN".parse::<Aggregation>(), Err(()));
}
