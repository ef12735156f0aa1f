use std::borrow::Cow;

/// Errors surfaced to an embedding host.
#[ophub_derive::ophub_error]
pub enum BindingError {
    /// The registry rejected the name or the value kind.
    #[error("Registry error{}: {source}", format_context(.context))]
    Registry { source: ophub_kernel::error::RegistryError, context: Option<Cow<'static, str>> },

    /// The host value has no flag counterpart (arrays, objects, null).
    #[error("Unsupported host value{}: '{name}' cannot take {found}", format_context(.context))]
    UnsupportedValue {
        name: Cow<'static, str>,
        found: Cow<'static, str>,
        context: Option<Cow<'static, str>>,
    },
}

impl BindingError {
    /// Numeric status in the registry's scheme: `1` wrong name, `2` wrong type.
    #[must_use]
    pub const fn code(&self) -> u8 {
        match self {
            Self::Registry { source, .. } => source.code(),
            Self::UnsupportedValue { .. } => 2,
        }
    }
}
