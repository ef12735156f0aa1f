//! Quality estimation flag slice.
mod error;

pub use crate::error::{QualityError, QualityErrorExt};
use ophub_kernel::prelude::*;
use std::str::FromStr;

pub const WORD_SCORES: &str = "quality_word_scores";
pub const THRESHOLD: &str = "quality_threshold";
pub const AGGREGATION: &str = "quality_aggregation";

/// Declarant for the quality slice.
#[derive(Debug, Default, Clone, Copy)]
pub struct QualityFlags;

impl FeatureDeclarant for QualityFlags {
    fn name(&self) -> &str {
        "quality"
    }

    fn register_feature_flags(&self, registry: &mut OptionRegistry) -> Result<(), RegistryError> {
        registry.set_default(WORD_SCORES, false)?;
        registry.set_default(THRESHOLD, 0.0)?;
        registry.set_default(AGGREGATION, Aggregation::Mean.as_str())?;

        tracing::info!("Quality slice flags registered");
        Ok(())
    }
}

/// How word scores are folded into a sentence score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Aggregation {
    Mean,
    Min,
}

impl Aggregation {
    pub const ALL: [Self; 2] = [Self::Mean, Self::Min];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mean => "mean",
            Self::Min => "min",
        }
    }
}

impl FromStr for Aggregation {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|aggregation| aggregation.as_str() == s).ok_or(())
    }
}

/// Quality extension flags of one request, validated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QualitySettings {
    /// Scores are computed at all (first-class field, not an extension flag).
    pub enabled: bool,
    pub word_scores: bool,
    /// Sentences scoring below this are flagged, in `[0, 1]`.
    pub threshold: f64,
    pub aggregation: Aggregation,
}

impl QualitySettings {
    /// Reads the quality flags from `options`.
    ///
    /// # Errors
    /// [`QualityError::Flag`] for missing or mistyped flags, and the range/name errors
    /// for values outside what the scorer accepts.
    pub fn from_options(options: &ResponseOptions) -> Result<Self, QualityError> {
        let threshold: f64 = options.feature_flag(THRESHOLD)?;
        if !(0.0..=1.0).contains(&threshold) {
            return Err(QualityError::ThresholdOutOfRange { value: threshold, context: None });
        }

        let name: String = options.feature_flag(AGGREGATION)?;
        let aggregation = name
            .parse()
            .map_err(|()| QualityError::UnknownAggregation { name: name.into(), context: None })?;

        Ok(Self {
            enabled: options.quality_scores,
            word_scores: options.feature_flag(WORD_SCORES)?,
            threshold,
            aggregation,
        })
    }
}
