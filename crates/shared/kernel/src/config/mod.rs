use config::{Config, Environment, File};
use ophub_domain::constants::ENV_PREFIX;
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::Path;
use tracing::info;

/// Default base name of the config file, looked up in the working directory.
pub const DEFAULT_CONFIG_NAME: &str = "ophub";

/// Custom error type for config loading.
#[ophub_derive::ophub_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads a configuration from a file layered with environment overrides.
///
/// 1. **Base file**: `path` when given (must exist), otherwise an optional `ophub.*`
///    file in the working directory. The format follows the file extension.
/// 2. **Environment**: variables prefixed with `OPHUB__`; nested keys are joined with
///    double underscores (`OPHUB__RESPONSE__ALIGNMENT=true` maps to `response.alignment`).
///    Values are parsed into booleans and numbers where possible.
///
/// # Errors
/// Returns [`ConfigError::Config`] if an explicit file is missing, a source is malformed,
/// or the merged values do not fit `T`.
///
/// # Example
/// ```rust,no_run
/// use ophub_domain::config::OptionsConfig;
/// use ophub_kernel::config::load_config;
///
/// let cfg: OptionsConfig = load_config(Some("config/ophub.toml")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let file = match &path {
        Some(path) => {
            info!("Loading config from {}", path.as_ref().display());
            File::from(path.as_ref()).required(true)
        },
        None => File::with_name(DEFAULT_CONFIG_NAME).required(false),
    };

    let config = Config::builder()
        .add_source(file)
        .add_source(Environment::with_prefix(ENV_PREFIX).separator("__").try_parsing(true))
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
