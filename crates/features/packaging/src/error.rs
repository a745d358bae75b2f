use std::borrow::Cow;
use std::path::PathBuf;

/// Errors of the package build. Every variant aborts the build.
#[tw_derive::tw_error]
pub enum PackagingError {
    /// The prebuilt executable is absent or not executable.
    #[error("Tool not found ({}){}. Be sure to {remedy}", .path.display(), format_context(.context))]
    MissingArtifact {
        path: PathBuf,
        remedy: Cow<'static, str>,
        context: Option<Cow<'static, str>>,
    },

    /// The version file exists but is not a valid version record.
    #[error("Malformed version file{}: {source}", format_context(.context))]
    VersionFileParse { source: serde_json::Error, context: Option<Cow<'static, str>> },

    #[error("I/O failure{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Package directory walk failed{}: {source}", format_context(.context))]
    Walk { source: walkdir::Error, context: Option<Cow<'static, str>> },

    #[error("Archive write failed{}: {source}", format_context(.context))]
    Archive { source: zip::result::ZipError, context: Option<Cow<'static, str>> },

    #[error("Invalid package identity{}: {message}", format_context(.context))]
    InvalidIdentity { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Invalid entry point{}: {message}", format_context(.context))]
    InvalidEntryPoint { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Invalid namespace{}: {message}", format_context(.context))]
    InvalidNamespace { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Invalid platform{}: {message}", format_context(.context))]
    InvalidPlatform { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal packaging error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
