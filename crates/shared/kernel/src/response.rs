//! Request-scoped response configuration.

use crate::accessor::{FeatureMap, FlagType};
use crate::error::{RegistryError, RegistryErrorExt};
use crate::registry::OptionRegistry;
use ophub_domain::config::OptionsConfig;
use ophub_domain::constants::{
    ALIGNMENT, CONCAT_STRATEGY, CONTINUATION_DELIMITERS, HTML, QUALITY_SCORES, SENTENCE_MAPPINGS,
    SUBSTITUTE_INLINE_TAGS_WITH_SPACES,
};
use ophub_domain::features::AuxOutputs;
use ophub_domain::options::{ConcatStrategy, HtmlOptions};
use ophub_domain::value::{FlagKind, FlagValue};
use std::borrow::Cow;
use std::sync::Arc;

/// What the engine should produce for one translation request.
///
/// The first-class fields are stored independently. Consumers must read
/// [`ResponseOptions::include_sentence_mappings`] or [`ResponseOptions::outputs`]
/// instead of `sentence_mappings`, since alignments imply sentence mappings.
#[derive(Debug, Clone, Default)]
pub struct ResponseOptions {
    pub quality_scores: bool,
    pub alignment: bool,
    /// Strip HTML from the source and reinsert it in the translation.
    pub html: bool,
    pub html_options: HtmlOptions,
    pub sentence_mappings: bool,
    pub concat_strategy: ConcatStrategy,
    /// Extension flags not promoted to fields.
    pub flags: FeatureMap,
}

impl ResponseOptions {
    /// Fresh options inheriting every default of `table`.
    #[must_use]
    pub fn new(table: Arc<OptionRegistry>) -> Self {
        Self { flags: FeatureMap::new(table), ..Self::default() }
    }

    /// Sets an extension flag with a statically typed value.
    ///
    /// # Errors
    /// [`RegistryError::UnknownFlag`] for an undeclared name, [`RegistryError::TypeMismatch`]
    /// when `T` is not the declared kind.
    pub fn set_feature_flag<T: FlagType>(
        &mut self,
        name: &str,
        value: T,
    ) -> Result<(), RegistryError> {
        self.flags.set_flag(name, value)
    }

    /// Reads an extension flag.
    ///
    /// # Errors
    /// See [`FeatureMap::flag`].
    pub fn feature_flag<T: FlagType>(&self, name: &str) -> Result<T, RegistryError> {
        self.flags.flag(name)
    }

    /// Uniform "set by name" entry point covering first-class fields and extension flags.
    ///
    /// Field names are the host-facing camelCase names; tag sets are not scalar and
    /// are only reachable through [`ResponseOptions::html_options`].
    ///
    /// # Errors
    /// [`RegistryError::TypeMismatch`] when the value does not fit the field,
    /// otherwise whatever the flag map reports.
    pub fn set_flag(&mut self, name: &str, value: FlagValue) -> Result<(), RegistryError> {
        match name {
            QUALITY_SCORES => self.quality_scores = expect_bool(name, &value)?,
            ALIGNMENT => self.alignment = expect_bool(name, &value)?,
            HTML => self.html = expect_bool(name, &value)?,
            SENTENCE_MAPPINGS => self.sentence_mappings = expect_bool(name, &value)?,
            SUBSTITUTE_INLINE_TAGS_WITH_SPACES => {
                self.html_options.substitute_inline_tags_with_spaces = expect_bool(name, &value)?;
            },
            CONTINUATION_DELIMITERS => match value {
                FlagValue::Str(delimiters) => self.html_options.continuation_delimiters = delimiters,
                other => return Err(RegistryError::mismatch(name, FlagKind::Str, other.kind())),
            },
            CONCAT_STRATEGY => {
                let Some(raw) = value.as_str() else {
                    return Err(RegistryError::mismatch(name, FlagKind::Str, value.kind()));
                };
                self.concat_strategy = raw.parse().map_err(|()| RegistryError::TypeMismatch {
                    name: Cow::Borrowed(CONCAT_STRATEGY),
                    expected: FlagKind::Str,
                    actual: FlagKind::Str,
                    context: Some(Cow::Owned(format!("'{raw}' is not a concat strategy"))),
                })?;
            },
            _ => self.flags.set_value(name, value)?,
        }
        Ok(())
    }

    /// Whether the engine must emit sentence mappings.
    #[must_use]
    pub const fn include_sentence_mappings(&self) -> bool {
        self.sentence_mappings || self.alignment
    }

    /// Auxiliary outputs requested by this configuration, with implied outputs added.
    #[must_use]
    pub fn outputs(&self) -> AuxOutputs {
        let mut outputs = AuxOutputs::empty();
        outputs.set(AuxOutputs::QUALITY_SCORES, self.quality_scores);
        outputs.set(AuxOutputs::ALIGNMENT, self.alignment);
        outputs.set(AuxOutputs::SENTENCE_MAPPINGS, self.sentence_mappings);
        outputs.set(AuxOutputs::HTML, self.html);
        outputs.normalized()
    }

    /// Applies configured field values and extension flag overrides.
    ///
    /// Integral values written to float flags are read as floats.
    ///
    /// # Errors
    /// The first flag override the table rejects, with `"config flags"` as context.
    pub fn apply_config(&mut self, config: &OptionsConfig) -> Result<(), RegistryError> {
        let response = &config.response;
        self.quality_scores = response.quality_scores;
        self.alignment = response.alignment;
        self.html = response.html;
        self.sentence_mappings = response.sentence_mappings;
        self.concat_strategy = response.concat_strategy;
        self.html_options = response.html_options.clone();

        for (name, value) in &config.flags {
            let value = value.clone().widened_to(self.flags.kind(name));
            self.flags.set_value(name, value).context("config flags")?;
        }
        Ok(())
    }
}

fn expect_bool(name: &str, value: &FlagValue) -> Result<bool, RegistryError> {
    value.as_bool().ok_or_else(|| RegistryError::mismatch(name, FlagKind::Bool, value.kind()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> Arc<OptionRegistry> {
        let mut registry = OptionRegistry::new();
        registry.set_default("html_preserve_whitespace", false).unwrap();
        registry.set_default("quality_threshold", 0.0).unwrap();
        Arc::new(registry)
    }

    #[test]
    fn defaults_match_a_plain_request() {
        let options = ResponseOptions::new(table());
        assert!(!options.quality_scores);
        assert!(!options.alignment);
        assert!(!options.html);
        assert_eq!(options.concat_strategy, ConcatStrategy::Faithful);
        assert_eq!(options.outputs(), AuxOutputs::empty());
        assert!(!options.feature_flag::<bool>("html_preserve_whitespace").unwrap());
    }

    #[test]
    fn alignment_implies_sentence_mappings() {
        let options = ResponseOptions { alignment: true, sentence_mappings: false, ..Default::default() };
        assert!(options.include_sentence_mappings());
        assert!(options.outputs().contains(AuxOutputs::SENTENCE_MAPPINGS));
        assert!(!options.sentence_mappings);
    }

    #[test]
    fn set_flag_routes_fields_and_extensions() {
        let mut options = ResponseOptions::new(table());
        options.set_flag("qualityScores", FlagValue::Bool(true)).unwrap();
        options.set_flag("concatStrategy", FlagValue::from("space")).unwrap();
        options.set_flag("continuationDelimiters", FlagValue::from(" ")).unwrap();
        options.set_flag("quality_threshold", FlagValue::Float(0.4)).unwrap();

        assert!(options.quality_scores);
        assert_eq!(options.concat_strategy, ConcatStrategy::Space);
        assert_eq!(options.html_options.continuation_delimiters, " ");
        assert!((options.feature_flag::<f64>("quality_threshold").unwrap() - 0.4).abs() < f64::EPSILON);
    }

    #[test]
    fn set_flag_rejects_wrong_field_types() {
        let mut options = ResponseOptions::new(table());
        let err = options.set_flag("alignment", FlagValue::Int(1)).unwrap_err();
        assert!(matches!(err, RegistryError::TypeMismatch { expected: FlagKind::Bool, .. }));

        let err = options.set_flag("concatStrategy", FlagValue::from("newline")).unwrap_err();
        assert!(err.context_message().is_some());

        let err = options.set_flag("nope", FlagValue::Bool(true)).unwrap_err();
        assert!(matches!(err, RegistryError::UnknownFlag { .. }));
    }

    #[test]
    fn apply_config_sets_fields_and_overrides() {
        let mut config = OptionsConfig::default();
        config.response.html = true;
        config.response.alignment = true;
        config.flags.insert("html_preserve_whitespace".to_owned(), FlagValue::Bool(true));

        let mut options = ResponseOptions::new(table());
        options.apply_config(&config).unwrap();
        assert!(options.html);
        assert!(options.feature_flag::<bool>("html_preserve_whitespace").unwrap());
        assert!(options.outputs().contains(AuxOutputs::HTML | AuxOutputs::SENTENCE_MAPPINGS));
    }

    #[test]
    fn apply_config_reads_integers_as_floats_for_float_flags() {
        let mut config = OptionsConfig::default();
        config.flags.insert("quality_threshold".to_owned(), FlagValue::Int(1));

        let mut options = ResponseOptions::new(table());
        options.apply_config(&config).unwrap();
        assert_eq!(options.flags.value("quality_threshold").unwrap(), &FlagValue::Float(1.0));
    }

    #[test]
    fn apply_config_keeps_other_kind_mismatches() {
        let mut config = OptionsConfig::default();
        config.flags.insert("html_preserve_whitespace".to_owned(), FlagValue::Int(1));

        let err = ResponseOptions::new(table()).apply_config(&config).unwrap_err();
        assert!(matches!(
            err,
            RegistryError::TypeMismatch { expected: FlagKind::Bool, actual: FlagKind::Int, .. }
        ));
    }

    #[test]
    fn set_flag_reaches_extension_flag_without_default() {
        let mut registry = OptionRegistry::new();
        registry.declare("segment_language");
        let mut options = ResponseOptions::new(Arc::new(registry));

        assert!(matches!(
            options.feature_flag::<String>("segment_language"),
            Err(RegistryError::NoValue { .. })
        ));
        options.set_flag("segment_language", FlagValue::from("de")).unwrap();
        assert_eq!(options.feature_flag::<String>("segment_language").unwrap(), "de");

        let err = options.set_flag("segment_language", FlagValue::Bool(true)).unwrap_err();
        assert!(matches!(
            err,
            RegistryError::TypeMismatch { expected: FlagKind::Str, actual: FlagKind::Bool, .. }
        ));
    }

    #[test]
    fn apply_config_reports_unknown_override() {
        let mut config = OptionsConfig::default();
        config.flags.insert("ghost".to_owned(), FlagValue::Bool(true));

        let err = ResponseOptions::new(table()).apply_config(&config).unwrap_err();
        assert_eq!(err.name(), "ghost");
        assert_eq!(err.context_message(), Some("config flags"));
    }
}
