//! Sentence segmentation flag slice.
mod error;

pub use crate::error::{SegmentationError, SegmentationErrorExt};
use ophub_kernel::prelude::*;

pub const MAX_LENGTH: &str = "segment_max_length";
pub const SPLIT_ON_NEWLINES: &str = "segment_split_on_newlines";

const DEFAULT_MAX_LENGTH: i64 = 128;

/// Declarant for the segmentation slice.
#[derive(Debug, Default, Clone, Copy)]
pub struct SegmentationFlags;

impl FeatureDeclarant for SegmentationFlags {
    fn name(&self) -> &str {
        "segmentation"
    }

    fn register_feature_flags(&self, registry: &mut OptionRegistry) -> Result<(), RegistryError> {
        registry.set_default(MAX_LENGTH, DEFAULT_MAX_LENGTH)?;
        registry.set_default(SPLIT_ON_NEWLINES, true)?;

        tracing::info!("Segmentation slice flags registered");
        Ok(())
    }
}

/// Segmentation extension flags of one request, validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentationSettings {
    /// Sentences longer than this many tokens are wrapped.
    pub max_length: usize,
    pub split_on_newlines: bool,
}

impl SegmentationSettings {
    /// Reads the segmentation flags from `options`.
    ///
    /// # Errors
    /// [`SegmentationError::Flag`] for missing or mistyped flags,
    /// [`SegmentationError::Invalid`] for a non-positive maximum length.
    pub fn from_options(options: &ResponseOptions) -> Result<Self, SegmentationError> {
        let raw = options.feature_flag::<i64>(MAX_LENGTH)?;
        let Some(max_length) = usize::try_from(raw).ok().filter(|n| *n > 0) else {
            return Err(SegmentationError::Invalid {
                message: format!("{MAX_LENGTH} must be positive, got {raw}").into(),
                context: None,
            });
        };

        Ok(Self { max_length, split_on_newlines: options.feature_flag(SPLIT_ON_NEWLINES)? })
    }
}
