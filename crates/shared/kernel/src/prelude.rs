pub use crate::accessor::{FeatureMap, FlagType};
pub use crate::chain::{FeatureDeclarant, FlagChain};
pub use crate::error::{RegistryError, RegistryErrorExt};
pub use crate::flag_chain;
pub use crate::registry::{OptionEntry, OptionRegistry};
pub use crate::response::ResponseOptions;
pub use ophub_domain::features::AuxOutputs;
pub use ophub_domain::options::{ConcatStrategy, HtmlOptions};
pub use ophub_domain::value::{FlagKind, FlagValue};
