use std::borrow::Cow;

/// HTML slice error type.
#[ophub_derive::ophub_error]
pub enum HtmlError {
    #[error("HTML flag error{}: {source}", format_context(.context))]
    Flag { source: ophub_kernel::error::RegistryError, context: Option<Cow<'static, str>> },

    #[error("Invalid HTML setting{}: {message}", format_context(.context))]
    Invalid { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
