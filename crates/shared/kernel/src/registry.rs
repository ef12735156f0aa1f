//! Name → value store for one namespace of flags.
//!
//! Names are append-only: once declared they stay declared. Defaults fix the
//! [`FlagKind`] of a name and every later write is checked against it.

use crate::error::RegistryError;
use fxhash::FxHashMap;
use ophub_domain::value::{FlagKind, FlagValue};
use std::borrow::Cow;
use std::collections::BTreeSet;
use tracing::debug;

/// Default and current value of a single flag.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OptionEntry {
    default: Option<FlagValue>,
    current: Option<FlagValue>,
}

impl OptionEntry {
    #[must_use]
    pub const fn default_value(&self) -> Option<&FlagValue> {
        self.default.as_ref()
    }

    #[must_use]
    pub const fn current_value(&self) -> Option<&FlagValue> {
        self.current.as_ref()
    }

    /// Current value if set, else the default.
    #[must_use]
    pub fn effective(&self) -> Option<&FlagValue> {
        self.current.as_ref().or(self.default.as_ref())
    }

    /// Kind fixed by the default, or by the first written value when there is no default.
    #[must_use]
    pub fn kind(&self) -> Option<FlagKind> {
        self.default.as_ref().or(self.current.as_ref()).map(FlagValue::kind)
    }
}

/// Mapping from flag name to [`OptionEntry`].
///
/// # Example
/// ```rust
/// use ophub_kernel::registry::OptionRegistry;
///
/// let mut registry = OptionRegistry::new();
/// registry.set_default("foo", false)?;
/// registry.set("foo", true)?;
/// assert_eq!(registry.get("foo")?.as_bool(), Some(true));
/// # Ok::<(), ophub_kernel::error::RegistryError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct OptionRegistry {
    entries: FxHashMap<String, OptionEntry>,
}

impl OptionRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares `name` without a value. Declaring an existing name returns it untouched.
    pub fn declare(&mut self, name: impl Into<String>) -> &mut OptionEntry {
        self.entries.entry(name.into()).or_default()
    }

    /// Sets the default of `name`, declaring it if needed.
    ///
    /// A default of the same kind replaces the previous one (last writer wins).
    ///
    /// # Errors
    /// [`RegistryError::ConflictingType`] if `name` already has a default of another kind.
    pub fn set_default(
        &mut self,
        name: impl Into<String>,
        value: impl Into<FlagValue>,
    ) -> Result<(), RegistryError> {
        let name = name.into();
        let value = value.into();

        if let Some(existing) = self.kind(&name)
            && existing != value.kind()
        {
            return Err(RegistryError::ConflictingType {
                name: Cow::Owned(name),
                existing,
                requested: value.kind(),
                context: None,
            });
        }

        let entry = self.entries.entry(name.clone()).or_default();
        if let Some(previous) = entry.default.replace(value) {
            debug!(flag = %name, previous = %previous, "flag default overwritten");
        }
        Ok(())
    }

    /// Sets the current value of a declared flag.
    ///
    /// # Errors
    /// [`RegistryError::UnknownFlag`] if `name` was never declared,
    /// [`RegistryError::TypeMismatch`] if `value` has another kind than the flag.
    pub fn set(&mut self, name: &str, value: impl Into<FlagValue>) -> Result<(), RegistryError> {
        let value = value.into();
        let entry = self.entries.get_mut(name).ok_or_else(|| RegistryError::unknown(name))?;

        if let Some(expected) = entry.kind()
            && expected != value.kind()
        {
            return Err(RegistryError::mismatch(name, expected, value.kind()));
        }

        entry.current = Some(value);
        Ok(())
    }

    /// Current value of `name`, falling back to its default.
    ///
    /// # Errors
    /// [`RegistryError::UnknownFlag`] if undeclared, [`RegistryError::NoValue`] if neither
    /// a current value nor a default exists.
    pub fn get(&self, name: &str) -> Result<&FlagValue, RegistryError> {
        let entry = self.entries.get(name).ok_or_else(|| RegistryError::unknown(name))?;
        entry.effective().ok_or_else(|| RegistryError::NoValue {
            name: Cow::Owned(name.to_owned()),
            context: None,
        })
    }

    /// Drops the current value of `name` so reads see the default again.
    ///
    /// # Errors
    /// [`RegistryError::UnknownFlag`] if undeclared.
    pub fn reset(&mut self, name: &str) -> Result<(), RegistryError> {
        let entry = self.entries.get_mut(name).ok_or_else(|| RegistryError::unknown(name))?;
        entry.current = None;
        Ok(())
    }

    #[must_use]
    pub fn has(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    #[must_use]
    pub fn entry(&self, name: &str) -> Option<&OptionEntry> {
        self.entries.get(name)
    }

    #[must_use]
    pub fn kind(&self, name: &str) -> Option<FlagKind> {
        self.entries.get(name).and_then(OptionEntry::kind)
    }

    #[must_use]
    pub fn default_of(&self, name: &str) -> Option<&FlagValue> {
        self.entries.get(name).and_then(OptionEntry::default_value)
    }

    /// Snapshot of every declared name.
    #[must_use]
    pub fn available(&self) -> BTreeSet<String> {
        self.entries.keys().cloned().collect()
    }

    /// Every declared name with its default, ignoring current values.
    pub fn defaults(&self) -> impl Iterator<Item = (&str, Option<&FlagValue>)> {
        self.entries.iter().map(|(name, entry)| (name.as_str(), entry.default.as_ref()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
