//! Kernel of the option hub.
//!
//! * [`registry`]: name → value store with kinds fixed by defaults.
//! * [`chain`]: ordered composition of [`chain::FeatureDeclarant`]s into one flag table.
//! * [`accessor`]: typed, request-scoped overrides over a shared table.
//! * [`response`]: the per-request [`response::ResponseOptions`].
//! * [`config`]: layered file + environment config loading (non-wasm).
//!
//! ## Example
//! ```rust
//! use ophub_kernel::prelude::*;
//!
//! let table = flag_chain![|r: &mut OptionRegistry| r.set_default("quality_word_scores", false)]
//!     .build_shared()?;
//!
//! let mut options = ResponseOptions::new(table);
//! options.set_feature_flag("quality_word_scores", true)?;
//! assert!(options.feature_flag::<bool>("quality_word_scores")?);
//! assert!(options.set_feature_flag("quality_word_scores", 1_i64).is_err());
//! # Ok::<(), RegistryError>(())
//! ```

pub mod accessor;
pub mod chain;
#[cfg(not(target_arch = "wasm32"))]
pub mod config;
pub mod error;
pub mod prelude;
pub mod registry;
pub mod response;

pub use ophub_domain as domain;
