//! Facade crate for the option hub.
//! Re-exports domain/kernel primitives and composes the enabled flag declarants.
//! Keep this crate thin: it should compose other crates, not implement option logic.
//!
//! ## Usage
//! - Enable the declarant features you need (`html`, `quality`, `segmentation`).
//! - Call [`init`] once at startup; it builds the process-wide default table.
//! - Create one [`ResponseOptions`] per request with [`response_options`].

pub use ophub_domain as domain;
pub use ophub_kernel as kernel;

use ophub_kernel::chain::FlagChain;
use ophub_kernel::error::RegistryError;
use ophub_kernel::registry::OptionRegistry;
use ophub_kernel::response::ResponseOptions;
use std::sync::{Arc, OnceLock};

/// Declarant slices compiled into this build.
pub mod features {
    #[cfg(feature = "html")]
    pub use ophub_html as html;
    #[cfg(feature = "quality")]
    pub use ophub_quality as quality;
    #[cfg(feature = "segmentation")]
    pub use ophub_segmentation as segmentation;

    /// Build-time enabled declarants (by Cargo feature), in registration order.
    pub const ENABLED: &[&str] = &[
        #[cfg(feature = "html")]
        "html",
        #[cfg(feature = "quality")]
        "quality",
        #[cfg(feature = "segmentation")]
        "segmentation",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

static DEFAULTS: OnceLock<Arc<OptionRegistry>> = OnceLock::new();

/// The chain of every enabled declarant, in [`features::ENABLED`] order.
#[must_use]
pub fn chain() -> FlagChain {
    #[allow(unused_mut)]
    let mut chain = FlagChain::new();

    #[cfg(feature = "html")]
    chain.push(features::html::HtmlFlags);
    #[cfg(feature = "quality")]
    chain.push(features::quality::QualityFlags);
    #[cfg(feature = "segmentation")]
    chain.push(features::segmentation::SegmentationFlags);

    chain
}

/// Builds the process-wide default table on first call and returns it.
///
/// The table is immutable once published; later calls return the same [`Arc`].
///
/// # Errors
/// Returns the declaration conflict that aborted the build. Nothing is published
/// in that case, so the next call retries.
pub fn init() -> Result<Arc<OptionRegistry>, RegistryError> {
    if let Some(table) = DEFAULTS.get() {
        return Ok(Arc::clone(table));
    }

    // Concurrent first calls may each build a table; only the stored one is announced.
    let table = chain().build_shared()?;
    let published = DEFAULTS.get_or_init(|| Arc::clone(&table));
    if Arc::ptr_eq(published, &table) {
        tracing::info!(
            flags = published.len(),
            declarants = ?features::ENABLED,
            "defaults published"
        );
    }
    Ok(Arc::clone(published))
}

/// The published default table, if [`init`] has completed.
#[must_use]
pub fn defaults() -> Option<Arc<OptionRegistry>> {
    DEFAULTS.get().cloned()
}

/// Fresh request-scoped options over the process-wide defaults.
///
/// # Errors
/// See [`init`].
pub fn response_options() -> Result<ResponseOptions, RegistryError> {
    init().map(ResponseOptions::new)
}
