#![allow(unreachable_pub)]

//! # Macros
//!
//! Procedural macros shared by the workspace crates.
//!
//! ## Usage
//! ```toml
//! [dependencies]
//! tw-derive.workspace = true
//! thiserror.workspace = true
//! ```
//!
//! The expansion refers to `::thiserror`, so every consumer must depend on `thiserror` directly.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Attribute macro for defining crate-level error enums.
///
/// Turns a plain enum into a `thiserror` error with context support.
///
/// # Features
///
/// * **Automatic Derives**: Injects `#[derive(Debug, thiserror::Error)]` when missing.
/// * **Context Support**: Generates a companion `...Ext` trait that adds `.context()`
///   to any `Result` that can be converted into this error type.
/// * **Standard Conversions**: Implements `From<T>` for variants containing a `source` field
///   (or a field marked `#[source]`/`#[from]`), enabling the `?` operator for upstream errors.
/// * **Internal Fallback**: Provides `From<&'static str>` and `From<String>` when an
///   `Internal` variant is present.
///
/// # Requirements
///
/// 1. The macro must be applied to an **enum**.
/// 2. Variants that support context must include a `context: Option<Cow<'static, str>>` field.
/// 3. Variants wrapping external errors must also carry the `context` field.
/// 4. Tuple or unit variants are rejected.
///
/// # Generated Items
///
/// * `<ErrorName>Ext` trait with `.context(...)` for `Result<T, ErrorName>` and for
///   `Result<T, SourceError>` of every source variant.
/// * `From<SourceError>` impls for variants with a source field.
/// * `From<&'static str>` and `From<String>` when an `Internal` variant is present.
/// * A private `format_context` helper used inside `#[error(...)]` strings.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
/// use tw_derive::tw_error;
///
/// #[tw_error]
/// pub enum PackagingError {
///     #[error("I/O failure{}: {source}", format_context(.context))]
///     Io { source: std::io::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal packaging error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn read_manifest() -> Result<String, PackagingError> {
///     std::fs::read_to_string("MANIFEST").context("Reading manifest")
/// }
/// ```
///
/// Variants with a source but no context slot are rejected:
///
/// ```compile_fail
/// #[tw_derive::tw_error]
/// pub enum DemoError {
///     #[error("IO error: {source}")]
///     Io { source: std::io::Error },
/// }
/// ```
///
/// So is a context slot of the wrong type:
///
/// ```compile_fail
/// #[tw_derive::tw_error]
/// pub enum DemoError {
///     #[error("IO error: {source}")]
///     Io { source: std::io::Error, context: Option<String> },
/// }
/// ```
///
/// Tuple variants and non-enum items do not compile either:
///
/// ```compile_fail
/// #[tw_derive::tw_error]
/// pub enum DemoError {
///     #[error("IO error: {0}")]
///     Io(std::io::Error),
/// }
/// ```
///
/// ```compile_fail
/// #[tw_derive::tw_error]
/// pub struct DemoError {
///     message: String,
/// }
/// ```
#[proc_macro_attribute]
pub fn tw_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).into()
}
