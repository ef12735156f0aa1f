use crate::options::{ConcatStrategy, HtmlOptions};
use crate::value::FlagValue;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level options configuration loaded at startup.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OptionsConfigInner {
    pub response: ResponseDefaults,
    /// Extension flag overrides keyed by flag name.
    pub flags: BTreeMap<String, FlagValue>,
    pub logging: LoggingConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into request handlers.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct OptionsConfig {
    #[serde(flatten, default)]
    inner: Arc<OptionsConfigInner>,
}

impl Deref for OptionsConfig {
    type Target = OptionsConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for OptionsConfig {
    fn deref_mut(&mut self) -> &mut OptionsConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// First-class response fields applied to every new response configuration.
#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ResponseDefaults {
    pub quality_scores: bool,
    pub alignment: bool,
    pub html: bool,
    pub sentence_mappings: bool,
    pub concat_strategy: ConcatStrategy,
    pub html_options: HtmlOptions,
}

/// Logger settings for hosts that set up tracing from the config file.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub directory: Option<PathBuf>,
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), directory: None, json: false }
    }
}
