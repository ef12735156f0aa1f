use ophub_derive::ophub_error;
use std::borrow::Cow;

#[ophub_error]
pub enum DemoError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Unknown key{}: {key}", format_context(.context))]
    UnknownKey { key: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn read() -> Result<(), DemoError> {
    Err(std::io::Error::other("boom")).context("reading")
}

fn main() {
    let err = read().unwrap_err();
    assert_eq!(err.context_message(), Some("reading"));

    let err: DemoError = "plain".into();
    assert!(err.context_message().is_none());

    let err = Err::<(), _>(DemoError::UnknownKey { key: "x".into(), context: None })
        .context("lookup")
        .unwrap_err();
    assert_eq!(err.to_string(), "Unknown key (lookup): x");
}
