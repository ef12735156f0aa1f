//! HTML reinsertion flag slice.
//!
//! Declares the extension flags the HTML reinsertion step reads, and a typed
//! [`HtmlSettings`] view the engine builds from a request's options.
mod error;

pub use crate::error::{HtmlError, HtmlErrorExt};
use ophub_kernel::prelude::*;

pub const PRESERVE_WHITESPACE: &str = "html_preserve_whitespace";
pub const SELF_CLOSING_SLASH: &str = "html_self_closing_slash";
pub const MAX_TAG_DEPTH: &str = "html_max_tag_depth";

const DEFAULT_MAX_TAG_DEPTH: i64 = 256;

/// Declarant for the HTML slice.
#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlFlags;

impl FeatureDeclarant for HtmlFlags {
    fn name(&self) -> &str {
        "html"
    }

    fn register_feature_flags(&self, registry: &mut OptionRegistry) -> Result<(), RegistryError> {
        registry.set_default(PRESERVE_WHITESPACE, false)?;
        registry.set_default(SELF_CLOSING_SLASH, false)?;
        registry.set_default(MAX_TAG_DEPTH, DEFAULT_MAX_TAG_DEPTH)?;

        tracing::info!("HTML slice flags registered");
        Ok(())
    }
}

/// HTML extension flags of one request, validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HtmlSettings {
    /// Keep whitespace-only text nodes between tags untouched.
    pub preserve_whitespace: bool,
    /// Write void elements as `<br/>` instead of `<br>`.
    pub self_closing_slash: bool,
    pub max_tag_depth: usize,
}

impl HtmlSettings {
    /// Reads the HTML flags from `options`.
    ///
    /// # Errors
    /// [`HtmlError::Flag`] if a flag is missing from the table or has another kind,
    /// [`HtmlError::Invalid`] if the tag depth is not positive.
    pub fn from_options(options: &ResponseOptions) -> Result<Self, HtmlError> {
        let depth = options.feature_flag::<i64>(MAX_TAG_DEPTH)?;
        let max_tag_depth = usize::try_from(depth)
            .ok()
            .filter(|d| *d > 0)
            .ok_or_else(|| HtmlError::Invalid {
                message: format!("{MAX_TAG_DEPTH} must be positive, got {depth}").into(),
                context: None,
            })?;

        Ok(Self {
            preserve_whitespace: options.feature_flag(PRESERVE_WHITESPACE)?,
            self_closing_slash: options.feature_flag(SELF_CLOSING_SLASH)?,
            max_tag_depth,
        })
    }
}
