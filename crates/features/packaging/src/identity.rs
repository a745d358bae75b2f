//! Distribution name and version of the package being built.

use crate::error::PackagingError;
use crate::version::VersionInfo;
use std::fmt;

/// Name and version of a package, validated at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageIdentity {
    name: String,
    version: String,
}

impl PackageIdentity {
    /// Derives the identity from the configured base name and the version file.
    ///
    /// name = `base_name` + suffix; version = version field, or `default_version`
    /// when the field is absent or empty.
    ///
    /// # Errors
    /// Returns [`PackagingError::InvalidIdentity`] when the result is not a valid
    /// distribution name or version.
    pub fn compute(
        base_name: &str,
        default_version: &str,
        info: &VersionInfo,
    ) -> Result<Self, PackagingError> {
        let name = format!("{base_name}{}", info.suffix());
        let version = info.version().unwrap_or(default_version).to_owned();
        Self::new(name, version)
    }

    /// # Errors
    /// Returns [`PackagingError::InvalidIdentity`] for invalid names or versions.
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Result<Self, PackagingError> {
        let name = name.into();
        let version = version.into();

        if !is_valid_name(&name) {
            return Err(PackagingError::InvalidIdentity {
                message: format!("'{name}' is not a valid distribution name").into(),
                context: None,
            });
        }
        if !is_valid_version(&version) {
            return Err(PackagingError::InvalidIdentity {
                message: format!("'{version}' is not a valid version").into(),
                context: Some(format!("package {name}").into()),
            });
        }

        Ok(Self { name, version })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Name as it appears in archive file names (`iree_tools_tflite`).
    #[must_use]
    pub fn escaped_name(&self) -> String {
        escape_component(&self.name)
    }

    #[must_use]
    pub fn escaped_version(&self) -> String {
        escape_component(&self.version)
    }

    /// `<name>-<version>.dist-info`
    #[must_use]
    pub fn dist_info_dir(&self) -> String {
        format!("{}-{}.dist-info", self.escaped_name(), self.escaped_version())
    }
}

impl fmt::Display for PackageIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.version)
    }
}

/// Letters, digits, `.`, `-`, `_`; alphanumeric at both ends.
fn is_valid_name(name: &str) -> bool {
    let edges_ok = name.chars().next().is_some_and(|c| c.is_ascii_alphanumeric())
        && name.chars().last().is_some_and(|c| c.is_ascii_alphanumeric());
    edges_ok && name.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'))
}

fn is_valid_version(version: &str) -> bool {
    version.chars().next().is_some_and(|c| c.is_ascii_alphanumeric())
        && version.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_' | '+' | '!'))
}

/// Collapses every run of characters outside `[A-Za-z0-9_.]` into one `_`.
fn escape_component(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut in_run = false;
    for c in raw.chars() {
        if c.is_ascii_alphanumeric() || c == '_' || c == '.' {
            out.push(c);
            in_run = false;
        } else if !in_run {
            out.push('_');
            in_run = true;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escaping_collapses_runs() {
        assert_eq!(escape_component("iree-tools-tflite"), "iree_tools_tflite");
        assert_eq!(escape_component("a--b"), "a_b");
        assert_eq!(escape_component("1.2.3+local-1"), "1.2.3_local_1");
    }

    #[test]
    fn name_rules() {
        assert!(is_valid_name("iree-tools-tflite-nightly"));
        assert!(is_valid_name("x"));
        assert!(!is_valid_name(""));
        assert!(!is_valid_name("-leading"));
        assert!(!is_valid_name("trailing-"));
        assert!(!is_valid_name("has space"));
    }

    #[test]
    fn version_rules() {
        assert!(is_valid_version("0.1dev1"));
        assert!(is_valid_version("20240101.123+g1234"));
        assert!(!is_valid_version(""));
        assert!(!is_valid_version("1.0/evil"));
    }
}
