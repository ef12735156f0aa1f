use ophub_domain::value::FlagKind;
use std::borrow::Cow;

/// Failures of registry, chain and accessor operations.
///
/// Existence is always checked before type, so [`RegistryError::UnknownFlag`] and
/// [`RegistryError::TypeMismatch`] tell a wrong name apart from a wrong value.
#[ophub_derive::ophub_error]
#[derive(Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The name was never declared.
    #[error("Unknown flag{}: '{name}'", format_context(.context))]
    UnknownFlag { name: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The value kind disagrees with the kind fixed for the name.
    #[error("Type mismatch for flag{}: '{name}' expects {expected}, got {actual}", format_context(.context))]
    TypeMismatch {
        name: Cow<'static, str>,
        expected: FlagKind,
        actual: FlagKind,
        context: Option<Cow<'static, str>>,
    },

    /// The name is declared but has neither a default nor a current value.
    #[error("Flag has no value{}: '{name}'", format_context(.context))]
    NoValue { name: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Two declarations gave the same name different kinds.
    #[error("Conflicting declaration{}: '{name}' is {existing}, redeclared as {requested}", format_context(.context))]
    ConflictingType {
        name: Cow<'static, str>,
        existing: FlagKind,
        requested: FlagKind,
        context: Option<Cow<'static, str>>,
    },
}

impl RegistryError {
    /// Numeric status for hosts that only understand integers (`0` is success).
    #[must_use]
    pub const fn code(&self) -> u8 {
        match self {
            Self::UnknownFlag { .. } => 1,
            Self::TypeMismatch { .. } => 2,
            Self::NoValue { .. } => 3,
            Self::ConflictingType { .. } => 4,
        }
    }

    /// Name of the flag the error is about.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::UnknownFlag { name, .. }
            | Self::TypeMismatch { name, .. }
            | Self::NoValue { name, .. }
            | Self::ConflictingType { name, .. } => name,
        }
    }

    pub(crate) fn unknown(name: &str) -> Self {
        Self::UnknownFlag { name: Cow::Owned(name.to_owned()), context: None }
    }

    pub(crate) fn mismatch(name: &str, expected: FlagKind, actual: FlagKind) -> Self {
        Self::TypeMismatch { name: Cow::Owned(name.to_owned()), expected, actual, context: None }
    }
}
