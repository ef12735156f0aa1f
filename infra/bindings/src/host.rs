//! Name-keyed access to [`ResponseOptions`] for hosts that only speak JSON-like values.

use crate::error::BindingError;
use crate::set::{join, split};
use ophub_kernel::domain::constants::{
    ALIGNMENT, CONCAT_STRATEGY, CONTINUATION_DELIMITERS, HTML, INLINE_TAGS, QUALITY_SCORES,
    RESPONSE_FIELDS, SENTENCE_MAPPINGS, SET_DELIMITER, SUBSTITUTE_INLINE_TAGS_WITH_SPACES,
    VOID_TAGS,
};
use ophub_kernel::prelude::*;
use serde_json::{Map, Number, Value};
use std::borrow::Cow;
use std::collections::BTreeSet;
use tracing::trace;

/// Host-side view of one request's options.
///
/// Tag sets cross the boundary as delimiter-joined strings. Everything else maps
/// onto JSON scalars. Validation stays with the registry: this type only converts.
#[derive(Debug, Clone, Default)]
pub struct HostOptions {
    options: ResponseOptions,
}

impl HostOptions {
    #[must_use]
    pub const fn new(options: ResponseOptions) -> Self {
        Self { options }
    }

    #[must_use]
    pub const fn options(&self) -> &ResponseOptions {
        &self.options
    }

    #[must_use]
    pub fn into_inner(self) -> ResponseOptions {
        self.options
    }

    /// Value of a first-class field or extension flag.
    ///
    /// # Errors
    /// [`BindingError::Registry`] for names the table does not know or flags without a value.
    pub fn get(&self, name: &str) -> Result<Value, BindingError> {
        let o = &self.options;
        let value = match name {
            QUALITY_SCORES => Value::Bool(o.quality_scores),
            ALIGNMENT => Value::Bool(o.alignment),
            HTML => Value::Bool(o.html),
            SENTENCE_MAPPINGS => Value::Bool(o.sentence_mappings),
            SUBSTITUTE_INLINE_TAGS_WITH_SPACES => {
                Value::Bool(o.html_options.substitute_inline_tags_with_spaces)
            },
            CONTINUATION_DELIMITERS => {
                Value::String(o.html_options.continuation_delimiters.clone())
            },
            CONCAT_STRATEGY => Value::String(o.concat_strategy.to_string()),
            VOID_TAGS => Value::String(join(&o.html_options.void_tags, SET_DELIMITER)),
            INLINE_TAGS => Value::String(join(&o.html_options.inline_tags, SET_DELIMITER)),
            _ => to_host_value(o.flags.value(name)?),
        };
        Ok(value)
    }

    /// Writes a first-class field or extension flag from a host value.
    ///
    /// # Errors
    /// [`BindingError::UnsupportedValue`] for arrays, objects and null, otherwise the
    /// registry's verdict on the name and kind.
    pub fn set(&mut self, name: &str, value: Value) -> Result<(), BindingError> {
        trace!(flag = name, value = %value, "host write");
        match name {
            VOID_TAGS => self.options.html_options.void_tags = tag_set(name, value)?,
            INLINE_TAGS => self.options.html_options.inline_tags = tag_set(name, value)?,
            _ => {
                let target = self.options.flags.kind(name);
                let value = from_host_value(name, value)?.widened_to(target);
                self.options.set_flag(name, value)?;
            },
        }
        Ok(())
    }

    /// Every first-class field name followed by every declared extension flag.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        RESPONSE_FIELDS
            .iter()
            .map(|name| (*name).to_owned())
            .chain(self.options.flags.table().available())
            .collect()
    }

    /// Declared extension flags with their defaults (`null` for flags without one).
    #[must_use]
    pub fn list_flags(&self) -> Map<String, Value> {
        self.options
            .flags
            .table()
            .defaults()
            .map(|(name, default)| (name.to_owned(), default.map_or(Value::Null, to_host_value)))
            .collect()
    }

    /// Effective value of every first-class field and extension flag. Flags
    /// declared without a default and never written show as `null`.
    ///
    /// # Errors
    /// Any read failure other than [`RegistryError::NoValue`].
    pub fn snapshot(&self) -> Result<Map<String, Value>, BindingError> {
        self.names()
            .into_iter()
            .map(|name| match self.get(&name) {
                Ok(value) => Ok((name, value)),
                Err(BindingError::Registry { source: RegistryError::NoValue { .. }, .. }) => {
                    Ok((name, Value::Null))
                },
                Err(e) => Err(e),
            })
            .collect()
    }
}

impl From<ResponseOptions> for HostOptions {
    fn from(options: ResponseOptions) -> Self {
        Self::new(options)
    }
}

/// Host representation of a flag value. Non-finite floats become `null`.
#[must_use]
pub fn to_host_value(value: &FlagValue) -> Value {
    match value {
        FlagValue::Bool(v) => Value::Bool(*v),
        FlagValue::Int(v) => Value::Number((*v).into()),
        FlagValue::Float(v) => Number::from_f64(*v).map_or(Value::Null, Value::Number),
        FlagValue::Str(v) => Value::String(v.clone()),
    }
}

/// Flag value for a host scalar.
///
/// Integral numbers become [`FlagValue::Int`]; callers widen them with
/// [`FlagValue::widened_to`] once the target kind is known.
///
/// # Errors
/// [`BindingError::UnsupportedValue`] for non-scalar values and numbers outside `i64`/`f64`.
pub fn from_host_value(name: &str, value: Value) -> Result<FlagValue, BindingError> {
    match value {
        Value::Bool(v) => Ok(FlagValue::Bool(v)),
        Value::String(v) => Ok(FlagValue::Str(v)),
        Value::Number(n) => n
            .as_i64()
            .map(FlagValue::Int)
            .or_else(|| n.as_f64().map(FlagValue::Float))
            .ok_or_else(|| unsupported(name, "number")),
        Value::Null => Err(unsupported(name, "null")),
        Value::Array(_) => Err(unsupported(name, "array")),
        Value::Object(_) => Err(unsupported(name, "object")),
    }
}

fn tag_set(name: &str, value: Value) -> Result<BTreeSet<String>, BindingError> {
    match value {
        Value::String(raw) => Ok(split(&raw, SET_DELIMITER)),
        Value::Array(items) => items
            .into_iter()
            .filter(|item| item.as_str() != Some(""))
            .map(|item| match item {
                Value::String(tag) => Ok(tag),
                _ => Err(unsupported(name, "non-string tag")),
            })
            .collect(),
        Value::Bool(_) => Err(not_a_tag_string(name, FlagKind::Bool)),
        Value::Number(n) => {
            Err(not_a_tag_string(name, if n.is_f64() { FlagKind::Float } else { FlagKind::Int }))
        },
        Value::Null => Err(unsupported(name, "null")),
        Value::Object(_) => Err(unsupported(name, "object")),
    }
}

fn not_a_tag_string(name: &str, actual: FlagKind) -> BindingError {
    BindingError::Registry {
        source: RegistryError::TypeMismatch {
            name: Cow::Owned(name.to_owned()),
            expected: FlagKind::Str,
            actual,
            context: None,
        },
        context: Some(Cow::Borrowed("tag sets take a delimited string")),
    }
}

fn unsupported(name: &str, found: &'static str) -> BindingError {
    BindingError::UnsupportedValue {
        name: Cow::Owned(name.to_owned()),
        found: Cow::Borrowed(found),
        context: None,
    }
}
