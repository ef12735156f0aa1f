use std::borrow::Cow;

/// Quality slice error type.
#[ophub_derive::ophub_error]
pub enum QualityError {
    #[error("Quality flag error{}: {source}", format_context(.context))]
    Flag { source: ophub_kernel::error::RegistryError, context: Option<Cow<'static, str>> },

    #[error("Quality threshold out of range{}: {value}", format_context(.context))]
    ThresholdOutOfRange { value: f64, context: Option<Cow<'static, str>> },

    #[error("Unknown score aggregation{}: '{name}'", format_context(.context))]
    UnknownAggregation { name: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
