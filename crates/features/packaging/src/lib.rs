//! # Platform Package Builder
//!
//! Wraps a prebuilt native executable into a platform-locked Python wheel.
//!
//! ## Pipeline
//!
//! A build is a linear run: `resolve → load version → compute identity → emit`.
//!
//! 1.  **Resolve ([`artifact`]):** the executable must exist at
//!     `<package-dir>/<namespace>/<tool><suffix>` before anything else happens.
//! 2.  **Version ([`version`]):** `version_info.json` supplies an optional name
//!     suffix and version. A missing file falls back to defaults; a malformed
//!     one stops the build.
//! 3.  **Identity ([`identity`]):** name and version of the distribution.
//! 4.  **Emit ([`wheel`]):** a `py3-none-<plat>` archive with
//!     `Root-Is-Purelib: false`, whatever the host OS.
//!
//! Any failure aborts the run and leaves the output directory untouched.

pub mod artifact;
pub mod descriptor;
mod error;
pub mod identity;
pub mod layout;
pub mod metadata;
pub mod platform;
pub mod version;
pub mod wheel;

pub use crate::descriptor::{EntryPoint, InstallScheme, PackageDescriptor, WheelTag};
pub use crate::error::{PackagingError, PackagingErrorExt};
pub use crate::identity::PackageIdentity;
pub use crate::platform::{Arch, Os, Platform};

use crate::layout::BundleFile;
use crate::metadata::DistInfo;
use crate::wheel::WheelWriter;
use std::path::PathBuf;
use tracing::{info, instrument};
use tw_domain::config::PackagingConfig;

/// Everything needed to write the archive, computed without touching the
/// output directory.
#[derive(Debug, Clone)]
pub struct BuildPlan {
    pub descriptor: PackageDescriptor,
    pub files: Vec<BundleFile>,
    pub dist_info: DistInfo,
}

/// Result of a successful build.
#[derive(Debug, Clone)]
pub struct BuiltPackage {
    pub path: PathBuf,
    pub descriptor: PackageDescriptor,
}

/// Builds one platform-locked package from a [`PackagingConfig`].
#[derive(Debug, Clone)]
pub struct Packager {
    config: PackagingConfig,
    platform: Platform,
    plat_name: Option<String>,
}

impl Packager {
    #[must_use]
    pub const fn new(config: PackagingConfig, platform: Platform) -> Self {
        Self { config, platform, plat_name: None }
    }

    /// Replaces the wheel platform tag derived from the target platform.
    #[must_use]
    pub fn plat_name(mut self, tag: impl Into<String>) -> Self {
        self.plat_name = Some(tag.into());
        self
    }

    #[must_use]
    pub const fn config(&self) -> &PackagingConfig {
        &self.config
    }

    #[must_use]
    pub const fn platform(&self) -> Platform {
        self.platform
    }

    /// Runs every stage except writing the archive.
    ///
    /// # Errors
    /// Returns the first stage failure: [`PackagingError::InvalidNamespace`],
    /// [`PackagingError::MissingArtifact`],
    /// [`PackagingError::VersionFileParse`], [`PackagingError::InvalidIdentity`],
    /// [`PackagingError::InvalidEntryPoint`], [`PackagingError::InvalidPlatform`],
    /// or I/O errors while reading inputs.
    #[instrument(skip_all, fields(platform = %self.platform))]
    pub fn plan(&self) -> Result<BuildPlan, PackagingError> {
        let PackagingConfig { tool, package, entry_point, paths } = &self.config;

        layout::validate_namespace(&package.namespace)?;
        let artifact = artifact::resolve_tool(
            &paths.package_dir,
            &package.namespace_dir(),
            &tool.name,
            self.platform,
            &tool.build_hint,
        )?;

        let info = version::load_version_info(&paths.version_file_path())?;
        let identity =
            PackageIdentity::compute(&package.name, &package.default_version, &info)?;
        info!(name = identity.name(), version = identity.version(), "Computed package identity");

        let plat_name = match &self.plat_name {
            Some(tag) => {
                platform::validate_plat_name(tag)?;
                tag.clone()
            },
            None => self.platform.wheel_tag().to_owned(),
        };

        let entry =
            EntryPoint::new(&entry_point.command, &entry_point.module, &entry_point.function)?;
        let files = layout::collect(&paths.package_dir, &package.namespace, &artifact, &entry)?;
        let descriptor = PackageDescriptor::platform_locked(identity, &plat_name, entry);
        let dist_info = DistInfo::render(&descriptor, package);

        Ok(BuildPlan { descriptor, files, dist_info })
    }

    /// Plans and writes the archive into the configured output directory.
    ///
    /// # Errors
    /// See [`Packager::plan`]; additionally [`PackagingError::Io`] and
    /// [`PackagingError::Archive`] while writing.
    #[instrument(skip_all, fields(platform = %self.platform))]
    pub fn build(&self) -> Result<BuiltPackage, PackagingError> {
        let BuildPlan { descriptor, files, dist_info } = self.plan()?;
        let path = WheelWriter::new(&self.config.paths.out_dir).write(&descriptor, &files, &dist_info)?;
        Ok(BuiltPackage { path, descriptor })
    }
}
