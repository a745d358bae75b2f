#![allow(dead_code)]

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tw_domain::config::PackagingConfig;
use tw_packaging::{Arch, Os, Packager, Platform};

pub const TOOL_BYTES: &[u8] = b"\x7fELF fake tool";
pub const LINUX: Platform = Platform::new(Os::Linux, Arch::X86_64);

/// Package dir inside the source tree, four levels below the project root.
pub const PACKAGE_DIR: &str = "integrations/tensorflow/python_projects/iree_tflite";

/// A source tree in a temporary directory: the project root `<tmp>` holds
/// `version_info.json`, the package dir `<tmp>/integrations/.../iree_tflite`
/// holds `iree/tools/tflite/iree-import-tflite`, and `<tmp>/dist` is the output.
#[derive(Debug)]
pub struct Fixture {
    pub temp: TempDir,
    pub config: PackagingConfig,
}

impl Fixture {
    /// # Panics
    /// * If the temporary tree cannot be created.
    #[must_use]
    pub fn new() -> Self {
        let fixture = Self::without_tool();
        fixture.write_tool("iree-import-tflite", TOOL_BYTES);
        fixture
    }

    /// # Panics
    /// * If the temporary directory cannot be created.
    #[must_use]
    pub fn without_tool() -> Self {
        let temp = TempDir::new().unwrap();
        let mut config = PackagingConfig::default();
        config.paths.package_dir = temp.path().join(PACKAGE_DIR);
        config.paths.out_dir = temp.path().join("dist");
        fs::create_dir_all(config.paths.package_dir.join("iree/tools/tflite")).unwrap();
        Self { temp, config }
    }

    #[must_use]
    pub fn package_dir(&self) -> &Path {
        &self.config.paths.package_dir
    }

    #[must_use]
    pub fn out_dir(&self) -> &Path {
        &self.config.paths.out_dir
    }

    /// # Panics
    /// * On I/O failure.
    pub fn write_file(&self, relative: &str, content: &[u8]) -> PathBuf {
        let path = self.package_dir().join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, content).unwrap();
        path
    }

    /// # Panics
    /// * On I/O failure.
    pub fn write_tool(&self, file_name: &str, content: &[u8]) -> PathBuf {
        let path = self.write_file(&format!("iree/tools/tflite/{file_name}"), content);
        set_mode(&path, 0o755);
        path
    }

    /// Where the packager looks for `version_info.json`.
    #[must_use]
    pub fn version_path(&self) -> PathBuf {
        self.config.paths.version_file_path()
    }

    /// Writes `version_info.json` at the project root.
    ///
    /// # Panics
    /// * On I/O failure.
    pub fn write_version(&self, json: &str) {
        fs::write(self.temp.path().join("version_info.json"), json).unwrap();
    }

    #[must_use]
    pub fn packager(&self) -> Packager {
        Packager::new(self.config.clone(), LINUX)
    }

    /// Entries of the output directory.
    #[must_use]
    pub fn outputs(&self) -> Vec<PathBuf> {
        match fs::read_dir(self.out_dir()) {
            Ok(dir) => dir.map(|e| e.unwrap().path()).collect(),
            Err(_) => Vec::new(),
        }
    }
}

#[cfg(unix)]
pub fn set_mode(path: &Path, mode: u32) {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(mode)).unwrap();
}

#[cfg(not(unix))]
pub fn set_mode(_path: &Path, _mode: u32) {}

/// # Panics
/// * If the archive cannot be opened.
#[must_use]
pub fn member_names(wheel: &Path) -> Vec<String> {
    let archive = zip::ZipArchive::new(fs::File::open(wheel).unwrap()).unwrap();
    archive.file_names().map(str::to_owned).collect()
}

/// # Panics
/// * If the archive or the member is missing.
#[must_use]
pub fn read_member(wheel: &Path, name: &str) -> Vec<u8> {
    let mut archive = zip::ZipArchive::new(fs::File::open(wheel).unwrap()).unwrap();
    let mut file = archive.by_name(name).unwrap();
    let mut out = Vec::new();
    file.read_to_end(&mut out).unwrap();
    out
}

#[must_use]
pub fn read_member_str(wheel: &Path, name: &str) -> String {
    String::from_utf8(read_member(wheel, name)).unwrap()
}

/// # Panics
/// * If the archive or the member is missing.
#[must_use]
pub fn member_mode(wheel: &Path, name: &str) -> Option<u32> {
    let mut archive = zip::ZipArchive::new(fs::File::open(wheel).unwrap()).unwrap();
    let file = archive.by_name(name).unwrap();
    file.unix_mode()
}
