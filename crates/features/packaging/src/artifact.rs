//! Locating the prebuilt executable that the package wraps.

use crate::error::PackagingError;
use crate::platform::Platform;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// The executable found on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolArtifact {
    /// Path on disk (symlinks are not resolved).
    pub path: PathBuf,
    /// File name including the platform suffix.
    pub file_name: String,
}

/// Where the executable is expected: `<package_dir>/<tool_dir>/<name><suffix>`.
#[must_use]
pub fn expected_path(package_dir: &Path, tool_dir: &Path, name: &str, platform: Platform) -> PathBuf {
    package_dir.join(tool_dir).join(format!("{name}{}", platform.exe_suffix()))
}

/// Resolves the executable and checks it can be packaged.
///
/// Symlinks are followed, so a tree populated by a symlinking build step is
/// accepted. On Unix hosts the target must carry an executable bit unless the
/// package targets Windows.
///
/// # Errors
/// Returns [`PackagingError::MissingArtifact`] naming the resolved path and
/// `build_hint` when the file is absent, not a regular file, or not executable.
pub fn resolve_tool(
    package_dir: &Path,
    tool_dir: &Path,
    name: &str,
    platform: Platform,
    build_hint: &str,
) -> Result<ToolArtifact, PackagingError> {
    let path = expected_path(package_dir, tool_dir, name, platform);
    let missing = |reason: &'static str| PackagingError::MissingArtifact {
        path: path.clone(),
        remedy: build_hint.to_owned().into(),
        context: Some(reason.into()),
    };

    let meta = match fs::metadata(&path) {
        Ok(meta) => meta,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Err(missing("does not exist")),
        Err(_) => return Err(missing("not accessible")),
    };
    if !meta.is_file() {
        return Err(missing("not a regular file"));
    }
    if platform.uses_exec_bit() && !is_executable(&meta) {
        return Err(missing("not executable"));
    }

    debug!(path = %path.display(), "Resolved tool executable");
    let file_name = format!("{name}{}", platform.exe_suffix());
    Ok(ToolArtifact { path, file_name })
}

#[cfg(unix)]
fn is_executable(meta: &fs::Metadata) -> bool {
    use std::os::unix::fs::PermissionsExt;
    meta.permissions().mode() & 0o111 != 0
}

#[cfg(not(unix))]
const fn is_executable(_meta: &fs::Metadata) -> bool {
    true
}
