//! Typed, request-scoped view over a shared flag table.
//!
//! A [`FeatureMap`] keeps the process-wide table behind an [`Arc`] and stores only
//! the values a caller overrides. Every write is checked in two stages: the name
//! must exist in the table, then the value kind must match the table's kind.

use crate::error::RegistryError;
use crate::registry::OptionRegistry;
use fxhash::FxHashMap;
use ophub_domain::value::{FlagKind, FlagValue};
use std::sync::Arc;

/// Rust types that map onto exactly one [`FlagKind`].
pub trait FlagType: Sized {
    const KIND: FlagKind;

    fn into_value(self) -> FlagValue;

    fn from_value(value: &FlagValue) -> Option<Self>;
}

impl FlagType for bool {
    const KIND: FlagKind = FlagKind::Bool;

    fn into_value(self) -> FlagValue {
        FlagValue::Bool(self)
    }

    fn from_value(value: &FlagValue) -> Option<Self> {
        value.as_bool()
    }
}

impl FlagType for i64 {
    const KIND: FlagKind = FlagKind::Int;

    fn into_value(self) -> FlagValue {
        FlagValue::Int(self)
    }

    fn from_value(value: &FlagValue) -> Option<Self> {
        value.as_int()
    }
}

impl FlagType for f64 {
    const KIND: FlagKind = FlagKind::Float;

    fn into_value(self) -> FlagValue {
        FlagValue::Float(self)
    }

    fn from_value(value: &FlagValue) -> Option<Self> {
        value.as_float()
    }
}

impl FlagType for String {
    const KIND: FlagKind = FlagKind::Str;

    fn into_value(self) -> FlagValue {
        FlagValue::Str(self)
    }

    fn from_value(value: &FlagValue) -> Option<Self> {
        value.as_str().map(ToOwned::to_owned)
    }
}

/// Overrides on top of a shared, immutable default table.
#[derive(Debug, Clone, Default)]
pub struct FeatureMap {
    table: Arc<OptionRegistry>,
    values: FxHashMap<String, FlagValue>,
}

impl FeatureMap {
    #[must_use]
    pub fn new(table: Arc<OptionRegistry>) -> Self {
        Self { table, values: FxHashMap::default() }
    }

    /// Stores `value` for `name` after checking existence, then kind.
    ///
    /// # Errors
    /// [`RegistryError::UnknownFlag`] for a name missing from the table,
    /// [`RegistryError::TypeMismatch`] when `T` is not the flag's kind.
    pub fn set_flag<T: FlagType>(&mut self, name: &str, value: T) -> Result<(), RegistryError> {
        self.check(name, T::KIND)?;
        self.values.insert(name.to_owned(), value.into_value());
        Ok(())
    }

    /// Typed read of the override, or the table value when not overridden.
    ///
    /// # Errors
    /// [`RegistryError::UnknownFlag`], [`RegistryError::TypeMismatch`] when `T` is not
    /// the flag's kind, or [`RegistryError::NoValue`].
    pub fn flag<T: FlagType>(&self, name: &str) -> Result<T, RegistryError> {
        let value = self.value(name)?;
        T::from_value(value).ok_or_else(|| RegistryError::mismatch(name, value.kind(), T::KIND))
    }

    /// Untyped write with the same two-stage check as [`FeatureMap::set_flag`].
    ///
    /// # Errors
    /// See [`FeatureMap::set_flag`].
    pub fn set_value(&mut self, name: &str, value: FlagValue) -> Result<(), RegistryError> {
        self.check(name, value.kind())?;
        self.values.insert(name.to_owned(), value);
        Ok(())
    }

    /// Untyped read of the override, or the table value when not overridden.
    ///
    /// # Errors
    /// [`RegistryError::UnknownFlag`] or [`RegistryError::NoValue`].
    pub fn value(&self, name: &str) -> Result<&FlagValue, RegistryError> {
        match self.values.get(name) {
            Some(value) => Ok(value),
            None => self.table.get(name),
        }
    }

    /// Drops the override for `name`. Returns whether one existed.
    pub fn reset(&mut self, name: &str) -> bool {
        self.values.remove(name).is_some()
    }

    #[must_use]
    pub fn is_overridden(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn overrides(&self) -> impl Iterator<Item = (&str, &FlagValue)> {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// The shared default table.
    #[must_use]
    pub const fn table(&self) -> &Arc<OptionRegistry> {
        &self.table
    }

    /// Kind writes to `name` must have: the table's kind, or for a flag declared
    /// without a default, the kind of the first value written to this map.
    #[must_use]
    pub fn kind(&self, name: &str) -> Option<FlagKind> {
        self.table.kind(name).or_else(|| self.values.get(name).map(FlagValue::kind))
    }

    fn check(&self, name: &str, actual: FlagKind) -> Result<(), RegistryError> {
        if !self.table.has(name) {
            return Err(RegistryError::unknown(name));
        }
        match self.kind(name) {
            Some(expected) if expected != actual => {
                Err(RegistryError::mismatch(name, expected, actual))
            },
            _ => Ok(()),
        }
    }
}
