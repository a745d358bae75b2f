//! Deterministic wheel archive writer.

use crate::descriptor::PackageDescriptor;
use crate::error::{PackagingError, PackagingErrorExt};
use crate::layout::BundleFile;
use crate::metadata::{DistInfo, RecordEntry, render_record};
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use sha2::{Digest, Sha256};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

const EXECUTABLE_MODE: u32 = 0o755;
const FILE_MODE: u32 = 0o644;
/// Mode of the published archive; temporary files start out as 0600.
const ARCHIVE_MODE: u32 = 0o644;

/// Writes `.whl` archives into an output directory.
///
/// Members are stored in the given order with a fixed timestamp and fixed
/// permissions, so equal inputs give byte-identical archives. The archive is
/// assembled in a temporary file next to its destination and renamed into
/// place only when complete.
#[derive(Debug, Clone)]
pub struct WheelWriter {
    out_dir: PathBuf,
}

impl WheelWriter {
    #[must_use]
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self { out_dir: out_dir.into() }
    }

    #[must_use]
    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Writes the archive and returns its path.
    ///
    /// # Errors
    /// Returns [`PackagingError::Io`] or [`PackagingError::Archive`]; no file is
    /// left at the destination on failure.
    pub fn write(
        &self,
        descriptor: &PackageDescriptor,
        files: &[BundleFile],
        dist_info: &DistInfo,
    ) -> Result<PathBuf, PackagingError> {
        fs::create_dir_all(&self.out_dir)
            .context(format!("Failed to create output directory {}", self.out_dir.display()))?;

        let target = self.out_dir.join(descriptor.archive_name());
        let mut temp = NamedTempFile::new_in(&self.out_dir)
            .context(format!("Temp creation failed in {}", self.out_dir.display()))?;

        let dist_info_dir = descriptor.identity().dist_info_dir();
        let mut records = Vec::with_capacity(files.len() + 4);
        {
            let mut zip = ZipWriter::new(temp.as_file_mut());

            for file in files {
                let bytes = file.read()?;
                records.push(add_member(&mut zip, &file.archive_path, &bytes, file.executable)?);
            }
            for (name, content) in dist_info.files() {
                let path = format!("{dist_info_dir}/{name}");
                records.push(add_member(&mut zip, &path, content.as_bytes(), false)?);
            }

            let record_path = format!("{dist_info_dir}/RECORD");
            let record = render_record(&records, &record_path);
            add_member(&mut zip, &record_path, record.as_bytes(), false)?;

            zip.finish().context("Failed to finalize archive")?;
        }

        set_archive_mode(temp.as_file())?;
        temp.as_file().sync_all().context("Hardware sync failed")?;
        temp.persist(&target)
            .map_err(|err| err.error)
            .context(format!("Atomic swap failed: {}", target.display()))?;

        info!(path = %target.display(), members = records.len() + 1, "Wrote wheel");
        Ok(target)
    }
}

#[cfg(unix)]
fn set_archive_mode(file: &File) -> Result<(), PackagingError> {
    use std::os::unix::fs::PermissionsExt;
    file.set_permissions(fs::Permissions::from_mode(ARCHIVE_MODE))
        .context("Failed to set archive permissions")
}

#[cfg(not(unix))]
#[allow(clippy::unnecessary_wraps)]
const fn set_archive_mode(_file: &File) -> Result<(), PackagingError> {
    Ok(())
}

fn add_member(
    zip: &mut ZipWriter<&mut File>,
    path: &str,
    bytes: &[u8],
    executable: bool,
) -> Result<RecordEntry, PackagingError> {
    let mode = if executable { EXECUTABLE_MODE } else { FILE_MODE };
    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .last_modified_time(DateTime::default())
        .unix_permissions(mode);

    zip.start_file(path, options).context(format!("Failed to add {path}"))?;
    zip.write_all(bytes).context(format!("Failed to write {path}"))?;
    debug!(path, size = bytes.len(), "Added archive member");

    Ok(RecordEntry { path: path.to_owned(), hash: record_hash(bytes), size: bytes.len() as u64 })
}

/// `sha256=` followed by the unpadded URL-safe base64 digest.
#[must_use]
pub fn record_hash(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("sha256={}", URL_SAFE_NO_PAD.encode(hasher.finalize()))
}
