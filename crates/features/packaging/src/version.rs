//! The shared version file (`version_info.json`).

use crate::error::{PackagingError, PackagingErrorExt};
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{info, warn};

/// Optional version overrides published by the release tooling.
///
/// Unknown keys are ignored; empty strings count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct VersionInfo {
    pub package_suffix: Option<String>,
    pub package_version: Option<String>,
}

impl VersionInfo {
    /// Suffix appended to the distribution name, empty when unset.
    #[must_use]
    pub fn suffix(&self) -> &str {
        self.package_suffix.as_deref().unwrap_or_default()
    }

    /// Explicit version, if set and non-empty.
    #[must_use]
    pub fn version(&self) -> Option<&str> {
        self.package_version.as_deref().filter(|v| !v.is_empty())
    }
}

/// Reads the version file.
///
/// A missing file is not an error: a warning is logged and defaults are used.
///
/// # Errors
/// Returns [`PackagingError::Io`] if the file exists but cannot be read, and
/// [`PackagingError::VersionFileParse`] if its content is not a version record.
pub fn load_version_info(path: &Path) -> Result<VersionInfo, PackagingError> {
    let raw = match fs::read(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!(path = %path.display(), "Version file not found. Using defaults");
            return Ok(VersionInfo::default());
        },
        Err(e) => {
            return Err(e).context(format!("Failed to read version file {}", path.display()));
        },
    };

    let info: VersionInfo = serde_json::from_slice(&raw)
        .context(format!("Version file {}", path.display()))?;
    info!(
        path = %path.display(),
        suffix = info.suffix(),
        version = info.version().unwrap_or("<default>"),
        "Loaded version info"
    );
    Ok(info)
}
