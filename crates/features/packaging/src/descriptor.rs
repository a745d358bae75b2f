//! What the emitted archive declares about itself.

use crate::error::PackagingError;
use crate::identity::PackageIdentity;
use std::fmt;

/// Compatibility tag `<python>-<abi>-<platform>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WheelTag {
    python: String,
    abi: String,
    platform: String,
}

impl WheelTag {
    /// Any Python 3, no ABI dependency, locked to `plat_name`.
    #[must_use]
    pub fn platform_locked(plat_name: &str) -> Self {
        Self { python: "py3".to_owned(), abi: "none".to_owned(), platform: plat_name.to_owned() }
    }

    #[must_use]
    pub fn python(&self) -> &str {
        &self.python
    }

    #[must_use]
    pub fn abi(&self) -> &str {
        &self.abi
    }

    #[must_use]
    pub fn platform(&self) -> &str {
        &self.platform
    }
}

impl fmt::Display for WheelTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.python, self.abi, self.platform)
    }
}

/// Install location of the archive root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display, strum_macros::AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum InstallScheme {
    Purelib,
    Platlib,
}

/// Console command `command = module:function`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryPoint {
    command: String,
    module: String,
    function: String,
}

impl EntryPoint {
    /// # Errors
    /// Returns [`PackagingError::InvalidEntryPoint`] if the command is empty or
    /// contains whitespace or `=`, or if module or function are not dotted
    /// Python identifiers.
    pub fn new(command: &str, module: &str, function: &str) -> Result<Self, PackagingError> {
        let invalid = |message: String| PackagingError::InvalidEntryPoint {
            message: message.into(),
            context: Some(format!("command '{command}'").into()),
        };

        if command.is_empty() || command.chars().any(|c| c.is_whitespace() || c == '=') {
            return Err(invalid(format!("'{command}' is not a usable command name")));
        }
        if !module.split('.').all(is_identifier) {
            return Err(invalid(format!("'{module}' is not a module path")));
        }
        if !function.split('.').all(is_identifier) {
            return Err(invalid(format!("'{function}' is not a callable name")));
        }

        Ok(Self { command: command.to_owned(), module: module.to_owned(), function: function.to_owned() })
    }

    #[must_use]
    pub fn command(&self) -> &str {
        &self.command
    }

    #[must_use]
    pub fn module(&self) -> &str {
        &self.module
    }

    #[must_use]
    pub fn function(&self) -> &str {
        &self.function
    }

    /// `module:function`
    #[must_use]
    pub fn locator(&self) -> String {
        format!("{}:{}", self.module, self.function)
    }
}

/// ASCII Python identifier.
pub(crate) fn is_identifier(part: &str) -> bool {
    let mut chars = part.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Everything the archive declares: identity, tag, scheme and entry point.
///
/// Only platform-locked descriptors can be built, so an archive carrying a
/// native executable is never installable as pure Python.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageDescriptor {
    identity: PackageIdentity,
    tag: WheelTag,
    scheme: InstallScheme,
    entry_point: EntryPoint,
}

impl PackageDescriptor {
    #[must_use]
    pub fn platform_locked(identity: PackageIdentity, plat_name: &str, entry_point: EntryPoint) -> Self {
        Self {
            identity,
            tag: WheelTag::platform_locked(plat_name),
            scheme: InstallScheme::Platlib,
            entry_point,
        }
    }

    #[must_use]
    pub const fn identity(&self) -> &PackageIdentity {
        &self.identity
    }

    #[must_use]
    pub const fn tag(&self) -> &WheelTag {
        &self.tag
    }

    #[must_use]
    pub const fn scheme(&self) -> InstallScheme {
        self.scheme
    }

    #[must_use]
    pub const fn entry_point(&self) -> &EntryPoint {
        &self.entry_point
    }

    #[must_use]
    pub fn root_is_purelib(&self) -> bool {
        self.scheme == InstallScheme::Purelib
    }

    /// `<name>-<version>-<tag>.whl`
    #[must_use]
    pub fn archive_name(&self) -> String {
        format!(
            "{}-{}-{}.whl",
            self.identity.escaped_name(),
            self.identity.escaped_version(),
            self.tag
        )
    }
}
