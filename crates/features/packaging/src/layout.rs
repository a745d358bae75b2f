//! Files that go into the archive besides the `.dist-info` directory.

use crate::artifact::ToolArtifact;
use crate::descriptor::{EntryPoint, is_identifier};
use crate::error::{PackagingError, PackagingErrorExt};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Component, Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Where the bytes of a bundled file come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileSource {
    Disk(PathBuf),
    Generated(Vec<u8>),
}

/// One archive member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleFile {
    /// `/`-separated path inside the archive.
    pub archive_path: String,
    pub source: FileSource,
    /// Stored with mode 0755 instead of 0644.
    pub executable: bool,
}

impl BundleFile {
    /// # Errors
    /// Returns [`PackagingError::Io`] if a disk-backed file cannot be read.
    pub fn read(&self) -> Result<Vec<u8>, PackagingError> {
        match &self.source {
            FileSource::Disk(path) => {
                fs::read(path).context(format!("Failed to read {}", path.display()))
            },
            FileSource::Generated(bytes) => Ok(bytes.clone()),
        }
    }

    #[must_use]
    pub const fn is_generated(&self) -> bool {
        matches!(self.source, FileSource::Generated(_))
    }
}

/// Checks that `namespace` is a dotted package path such as `iree.tools.tflite`.
///
/// # Errors
/// Returns [`PackagingError::InvalidNamespace`] for empty namespaces or
/// segments that are not Python identifiers.
pub fn validate_namespace(namespace: &str) -> Result<(), PackagingError> {
    if namespace.split('.').all(is_identifier) {
        Ok(())
    } else {
        Err(PackagingError::InvalidNamespace {
            message: format!("'{namespace}' is not a dotted package path").into(),
            context: None,
        })
    }
}

/// Collects the archive members, ordered by archive path.
///
/// Bundles every `.py` file under `<package_dir>/<namespace>` (skipping
/// `__pycache__`), the tool executable, and the entry-point module. A missing
/// entry-point module is generated as a shim that runs the bundled executable,
/// together with `__init__.py` files for the regular packages between the
/// namespace and the module. Namespace levels never receive an `__init__.py`.
///
/// # Errors
/// Returns [`PackagingError::InvalidNamespace`] for a malformed namespace,
/// [`PackagingError::Walk`] if the tree cannot be traversed, and
/// [`PackagingError::InvalidEntryPoint`] if a shim is needed for a dotted
/// function name.
pub fn collect(
    package_dir: &Path,
    namespace: &str,
    tool: &ToolArtifact,
    entry_point: &EntryPoint,
) -> Result<Vec<BundleFile>, PackagingError> {
    validate_namespace(namespace)?;
    let ns_parts: Vec<&str> = namespace.split('.').collect();
    let ns_dir: PathBuf = ns_parts.iter().collect();
    let mut files = BTreeMap::new();

    let root = package_dir.join(&ns_dir);
    if root.is_dir() {
        let walker = WalkDir::new(&root)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| e.file_name() != "__pycache__");
        for entry in walker {
            let entry = entry.context(format!("Walking {}", root.display()))?;
            let is_py = entry.path().extension().is_some_and(|ext| ext == "py");
            if !entry.file_type().is_file() || !is_py {
                continue;
            }
            let Some(archive_path) = archive_path(package_dir, entry.path()) else {
                continue;
            };
            files.insert(archive_path.clone(), BundleFile {
                archive_path,
                source: FileSource::Disk(entry.path().to_path_buf()),
                executable: false,
            });
        }
    }

    let tool_path = join_archive(ns_parts.iter().copied().chain([tool.file_name.as_str()]));
    files.insert(tool_path.clone(), BundleFile {
        archive_path: tool_path,
        source: FileSource::Disk(tool.path.clone()),
        executable: true,
    });

    add_entry_module(&mut files, package_dir, &ns_parts, tool, entry_point)?;

    debug!(count = files.len(), "Collected bundle files");
    Ok(files.into_values().collect())
}

fn add_entry_module(
    files: &mut BTreeMap<String, BundleFile>,
    package_dir: &Path,
    ns_parts: &[&str],
    tool: &ToolArtifact,
    entry_point: &EntryPoint,
) -> Result<(), PackagingError> {
    let module_parts: Vec<&str> = entry_point.module().split('.').collect();
    let Some((leaf, packages)) = module_parts.split_last() else {
        return Ok(());
    };
    let module_path = join_archive(packages.iter().copied().chain([format!("{leaf}.py").as_str()]));
    if files.contains_key(&module_path) {
        return Ok(());
    }

    let on_disk = package_dir.join(&module_path);
    if on_disk.is_file() {
        files.insert(module_path.clone(), BundleFile {
            archive_path: module_path,
            source: FileSource::Disk(on_disk),
            executable: false,
        });
        return Ok(());
    }

    if entry_point.function().contains('.') {
        return Err(PackagingError::InvalidEntryPoint {
            message: format!("cannot generate '{}' for a dotted function", entry_point.locator()).into(),
            context: Some(format!("module {module_path} is missing").into()),
        });
    }

    let shim = render_shim(packages.len(), ns_parts, &tool.file_name, entry_point.function());
    debug!(path = %module_path, "Generating entry-point shim");
    files.insert(module_path.clone(), BundleFile {
        archive_path: module_path,
        source: FileSource::Generated(shim.into_bytes()),
        executable: false,
    });

    if packages.starts_with(ns_parts) {
        for depth in ns_parts.len() + 1..=packages.len() {
            let init = join_archive(packages[..depth].iter().copied().chain(["__init__.py"]));
            if !files.contains_key(&init) && !package_dir.join(&init).is_file() {
                files.insert(init.clone(), BundleFile {
                    archive_path: init,
                    source: FileSource::Generated(Vec::new()),
                    executable: false,
                });
            }
        }
    }
    Ok(())
}

/// Python module that forwards its arguments to the bundled executable and
/// returns the exit code.
fn render_shim(depth: usize, ns_parts: &[&str], tool_file: &str, function: &str) -> String {
    let tool_parts = ns_parts
        .iter()
        .copied()
        .chain([tool_file])
        .map(|p| format!("{p:?}"))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        r#"import os
import subprocess
import sys

_ROOT = os.path.join(os.path.dirname(os.path.abspath(__file__)), *([os.pardir] * {depth}))
_TOOL = os.path.join(_ROOT, {tool_parts})


def {function}(args=None):
    if args is None:
        args = sys.argv[1:]
    return subprocess.call([_TOOL] + list(args))


if __name__ == "__main__":
    sys.exit({function}())
"#
    )
}

fn archive_path(base: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(base).ok()?;
    let parts = relative
        .components()
        .map(|c| match c {
            Component::Normal(part) => part.to_str(),
            _ => None,
        })
        .collect::<Option<Vec<_>>>()?;
    Some(parts.join("/"))
}

fn join_archive<'a>(parts: impl IntoIterator<Item = &'a str>) -> String {
    parts.into_iter().collect::<Vec<_>>().join("/")
}
