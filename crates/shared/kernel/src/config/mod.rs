use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::Path;
use tracing::{debug, info};

/// Prefix of environment variables that override configuration keys.
pub const ENV_PREFIX: &str = "TOOLWHEEL";
/// Separator between the prefix and nested keys (`TOOLWHEEL__PACKAGE__NAME`).
pub const ENV_SEPARATOR: &str = "__";

/// Custom error type for config loading.
#[tw_derive::tw_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// The environment source used by [`load_config`].
#[must_use]
pub fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX).separator(ENV_SEPARATOR)
}

/// Loads a configuration structure from an optional file and the process environment.
///
/// Layers, lowest precedence first:
/// 1. The `Default` values of `T` (through `#[serde(default)]`).
/// 2. The file at `path`, when given. Its format follows the extension (`.toml`).
/// 3. Environment variables prefixed with `TOOLWHEEL__`, nested with `__`
///    (e.g., `TOOLWHEEL__PACKAGE__NAME` maps to `package.name`).
///
/// # Errors
/// Returns [`ConfigError::Config`] if the given file does not exist, cannot be
/// parsed, or the merged values do not match `T`.
///
/// # Example
/// ```rust
/// use tw_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// #[serde(default)]
/// struct AppConfig {
///     out_dir: String,
/// }
///
/// let cfg: AppConfig = load_config(None::<&str>).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    load_config_with(path, environment())
}

/// Same as [`load_config`] with an explicit environment source.
///
/// # Errors
/// See [`load_config`].
pub fn load_config_with<T>(
    path: Option<impl AsRef<Path>>,
    env: Environment,
) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let mut builder = Config::builder();
    let path: Option<&Path> = path.as_ref().map(AsRef::as_ref);

    match path {
        Some(path) => {
            info!("Loading config from {}", path.display());
            builder = builder.add_source(File::from(path).required(true));
        },
        None => debug!("No config file given, using defaults"),
    }

    builder
        .add_source(env)
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")
}
