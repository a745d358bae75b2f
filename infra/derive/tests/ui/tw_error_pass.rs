use std::borrow::Cow;
use tw_derive::tw_error;

#[tw_error]
pub enum DemoError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Parse error{}: {inner}", format_context(.context))]
    Parse {
        #[source]
        inner: std::num::ParseIntError,
        context: Option<Cow<'static, str>>,
    },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn parse(raw: &str) -> Result<u32, DemoError> {
    raw.parse::<u32>().context("parsing a number")
}

fn main() {
    let err = parse("nope").unwrap_err();
    assert!(err.to_string().starts_with("Parse error (parsing a number)"));

    let io: DemoError = std::io::Error::other("boom").into();
    assert_eq!(io.to_string(), "IO error: boom");

    let internal: Result<(), DemoError> = Err("broken".into());
    let internal = internal.context("late").unwrap_err();
    assert_eq!(internal.to_string(), "Internal error (late): broken");
}
