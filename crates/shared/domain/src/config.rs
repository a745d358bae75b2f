use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level configuration of the platform package builder.
#[derive(Default, Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PackagingConfig {
    pub tool: ToolConfig,
    pub package: PackageConfig,
    pub entry_point: EntryPointConfig,
    pub paths: PathsConfig,
}

/// The prebuilt executable wrapped by the package.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ToolConfig {
    /// Base file name, without the platform executable suffix.
    pub name: String,
    /// Remedial build step shown when the executable is missing.
    pub build_hint: String,
}

/// Distribution metadata.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PackageConfig {
    /// Base distribution name; the version file may append a suffix.
    pub name: String,
    /// Version used when the version file does not provide one.
    pub default_version: String,
    /// Dotted package that holds the executable (e.g., `iree.tools.tflite`).
    pub namespace: String,
    pub summary: String,
    pub readme: String,
    pub author: String,
    pub author_email: String,
    pub license: String,
    pub homepage: String,
    pub requires_python: String,
    pub classifiers: Vec<String>,
}

/// The console command installed by the package.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct EntryPointConfig {
    pub command: String,
    pub module: String,
    pub function: String,
}

/// Filesystem locations, relative to the working directory unless absolute.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Directory containing the namespace package tree.
    pub package_dir: PathBuf,
    /// Project root holding the shared version file. Relative paths resolve
    /// against `package_dir`; the default is the source tree root four levels up
    /// (`integrations/tensorflow/python_projects/<package>`).
    pub project_root: PathBuf,
    /// Version file name, relative to the project root.
    pub version_file: PathBuf,
    /// Where the archive is written.
    pub out_dir: PathBuf,
}

impl PackageConfig {
    /// Directory of the namespace package relative to the package dir.
    #[must_use]
    pub fn namespace_dir(&self) -> PathBuf {
        self.namespace.split('.').collect()
    }
}

impl EntryPointConfig {
    /// `module:function` locator as written into `entry_points.txt`.
    #[must_use]
    pub fn locator(&self) -> String {
        format!("{}:{}", self.module, self.function)
    }
}

impl PathsConfig {
    /// Project root resolved against the package dir (absolute roots are kept).
    #[must_use]
    pub fn project_root(&self) -> PathBuf {
        self.package_dir.join(&self.project_root)
    }

    #[must_use]
    pub fn version_file_path(&self) -> PathBuf {
        self.project_root().join(&self.version_file)
    }
}

// --- Default ---

/// Source tree root relative to the package directory.
pub const DEFAULT_PROJECT_ROOT: &str = "../../../..";

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            name: "iree-import-tflite".to_owned(),
            build_hint: "build //iree_tf_compiler:iree-import-tflite and run ./symlink_binaries.sh"
                .to_owned(),
        }
    }
}

impl Default for PackageConfig {
    fn default() -> Self {
        Self {
            name: "iree-tools-tflite".to_owned(),
            default_version: "0.1dev1".to_owned(),
            namespace: "iree.tools.tflite".to_owned(),
            summary: "IREE TFLite Compiler Tools".to_owned(),
            readme: "TensorFlow TFLite Compiler Tools\n".to_owned(),
            author: "The IREE Team".to_owned(),
            author_email: "iree-discuss@googlegroups.com".to_owned(),
            license: "Apache-2.0".to_owned(),
            homepage: "https://github.com/iree-org/iree".to_owned(),
            requires_python: ">=3.7".to_owned(),
            classifiers: vec![
                "Development Status :: 3 - Alpha".to_owned(),
                "License :: OSI Approved :: Apache Software License".to_owned(),
                "Programming Language :: Python :: 3".to_owned(),
            ],
        }
    }
}

impl Default for EntryPointConfig {
    fn default() -> Self {
        Self {
            command: "iree-import-tflite".to_owned(),
            module: "iree.tools.tflite.scripts.iree_import_tflite.__main__".to_owned(),
            function: "main".to_owned(),
        }
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            package_dir: PathBuf::from("."),
            project_root: PathBuf::from(DEFAULT_PROJECT_ROOT),
            version_file: PathBuf::from("version_info.json"),
            out_dir: PathBuf::from("dist"),
        }
    }
}
