//! Ordered composition of flag declarants.
//!
//! Each component owns its flag names, kinds and defaults and registers them into
//! the registry handed to it. A [`FlagChain`] applies every declarant exactly once,
//! in insertion order, so later declarants may override earlier defaults of the
//! same kind. A declaration that changes the kind of a name aborts the build.

use crate::error::{RegistryError, RegistryErrorExt};
use crate::registry::OptionRegistry;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info};

/// A component that contributes flags to a shared registry.
pub trait FeatureDeclarant {
    /// Label used in logs and error context.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// Declares this component's flags and their defaults.
    ///
    /// # Errors
    /// Propagates [`RegistryError::ConflictingType`] from [`OptionRegistry::set_default`].
    fn register_feature_flags(&self, registry: &mut OptionRegistry) -> Result<(), RegistryError>;
}

impl<F> FeatureDeclarant for F
where
    F: Fn(&mut OptionRegistry) -> Result<(), RegistryError>,
{
    fn register_feature_flags(&self, registry: &mut OptionRegistry) -> Result<(), RegistryError> {
        self(registry)
    }
}

type BoxedDeclarant = Box<dyn FeatureDeclarant + Send + Sync>;

/// Builder that merges declarants into one flag table.
///
/// # Example
/// ```rust
/// use ophub_kernel::chain::FlagChain;
/// use ophub_kernel::registry::OptionRegistry;
///
/// let table = FlagChain::new()
///     .with(|r: &mut OptionRegistry| r.set_default("x", 1_i64))
///     .with(|r: &mut OptionRegistry| r.set_default("x", 2_i64))
///     .build()?;
/// assert_eq!(table.get("x")?.as_int(), Some(2));
/// # Ok::<(), ophub_kernel::error::RegistryError>(())
/// ```
#[derive(Default)]
pub struct FlagChain {
    declarants: Vec<BoxedDeclarant>,
}

impl fmt::Debug for FlagChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlagChain").field("declarants", &self.names()).finish()
    }
}

impl FlagChain {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a declarant to the end of the chain.
    #[must_use = "the chain does nothing until .build() is called"]
    pub fn with(mut self, declarant: impl FeatureDeclarant + Send + Sync + 'static) -> Self {
        self.push(declarant);
        self
    }

    pub fn push(&mut self, declarant: impl FeatureDeclarant + Send + Sync + 'static) {
        self.declarants.push(Box::new(declarant));
    }

    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.declarants.iter().map(|d| d.name()).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.declarants.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.declarants.is_empty()
    }

    /// Runs every declarant once, in order, against a fresh registry.
    ///
    /// # Errors
    /// The first declarant failure, with the declarant name attached as context.
    /// No partially built table is returned.
    pub fn build(self) -> Result<OptionRegistry, RegistryError> {
        let mut registry = OptionRegistry::new();

        for declarant in &self.declarants {
            let before = registry.len();
            declarant
                .register_feature_flags(&mut registry)
                .context(format!("declared by {}", declarant.name()))?;
            debug!(
                declarant = declarant.name(),
                new_flags = registry.len() - before,
                "feature flags registered"
            );
        }

        info!(flags = registry.len(), declarants = self.len(), "flag table built");
        Ok(registry)
    }

    /// Same as [`FlagChain::build`], frozen behind an [`Arc`] for sharing across requests.
    ///
    /// # Errors
    /// See [`FlagChain::build`].
    pub fn build_shared(self) -> Result<Arc<OptionRegistry>, RegistryError> {
        self.build().map(Arc::new)
    }
}

/// Builds a [`FlagChain`] from a list of declarants, applied left to right.
///
/// ```rust
/// use ophub_kernel::flag_chain;
/// use ophub_kernel::registry::OptionRegistry;
///
/// let chain = flag_chain![
///     |r: &mut OptionRegistry| r.set_default("foo", false),
///     |r: &mut OptionRegistry| r.set_default("bar", "hi"),
/// ];
/// assert_eq!(chain.len(), 2);
/// ```
#[macro_export]
macro_rules! flag_chain {
    ($($declarant:expr),* $(,)?) => {
        $crate::chain::FlagChain::new()$(.with($declarant))*
    };
}
