//! Boundary between the typed option model and untyped hosts.
//!
//! Hosts see flags as JSON scalars and tag sets as comma-joined strings. The
//! registry stays the single source of validation; this crate only converts.

mod error;
mod host;
mod set;

pub use crate::error::{BindingError, BindingErrorExt};
pub use crate::host::{HostOptions, from_host_value, to_host_value};
pub use crate::set::{StringSet, join, split};
pub use serde_json::Value;
