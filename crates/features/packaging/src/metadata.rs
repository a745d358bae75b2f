//! Text files of the `.dist-info` directory.

use crate::descriptor::PackageDescriptor;
use std::fmt::Write as _;
use tw_domain::config::PackageConfig;

const GENERATOR: &str = concat!("toolwheel (", env!("CARGO_PKG_VERSION"), ")");

/// Rendered `.dist-info` members, except `RECORD`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistInfo {
    pub metadata: String,
    pub wheel: String,
    pub entry_points: String,
    pub top_level: String,
}

impl DistInfo {
    #[must_use]
    pub fn render(descriptor: &PackageDescriptor, package: &PackageConfig) -> Self {
        Self {
            metadata: render_metadata(descriptor, package),
            wheel: render_wheel(descriptor),
            entry_points: render_entry_points(descriptor),
            top_level: render_top_level(&package.namespace),
        }
    }

    /// `(file name, content)` pairs in archive order.
    #[must_use]
    pub fn files(&self) -> [(&'static str, &str); 4] {
        [
            ("METADATA", self.metadata.as_str()),
            ("WHEEL", self.wheel.as_str()),
            ("entry_points.txt", self.entry_points.as_str()),
            ("top_level.txt", self.top_level.as_str()),
        ]
    }
}

fn render_metadata(descriptor: &PackageDescriptor, package: &PackageConfig) -> String {
    let identity = descriptor.identity();
    let mut out = String::new();
    let mut field = |key: &str, value: &str| {
        if !value.is_empty() {
            let _ = writeln!(out, "{key}: {value}");
        }
    };

    field("Metadata-Version", "2.1");
    field("Name", identity.name());
    field("Version", identity.version());
    field("Summary", &package.summary);
    field("Home-page", &package.homepage);
    field("Author", &package.author);
    field("Author-email", &package.author_email);
    field("License", &package.license);
    for classifier in &package.classifiers {
        field("Classifier", classifier);
    }
    field("Requires-Python", &package.requires_python);

    if !package.readme.is_empty() {
        field("Description-Content-Type", "text/markdown");
        out.push('\n');
        out.push_str(&package.readme);
        if !package.readme.ends_with('\n') {
            out.push('\n');
        }
    }
    out
}

fn render_wheel(descriptor: &PackageDescriptor) -> String {
    format!(
        "Wheel-Version: 1.0\nGenerator: {GENERATOR}\nRoot-Is-Purelib: {}\nTag: {}\n",
        descriptor.root_is_purelib(),
        descriptor.tag()
    )
}

fn render_entry_points(descriptor: &PackageDescriptor) -> String {
    let entry = descriptor.entry_point();
    format!("[console_scripts]\n{} = {}\n", entry.command(), entry.locator())
}

fn render_top_level(namespace: &str) -> String {
    let top = namespace.split('.').next().unwrap_or(namespace);
    format!("{top}\n")
}

/// One `RECORD` row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordEntry {
    pub path: String,
    /// `sha256=<urlsafe base64, unpadded>`
    pub hash: String,
    pub size: u64,
}

/// Renders `RECORD`; `record_path` is listed last with empty hash and size.
#[must_use]
pub fn render_record(entries: &[RecordEntry], record_path: &str) -> String {
    let mut out = String::new();
    for entry in entries {
        let _ = writeln!(out, "{},{},{}", csv_field(&entry.path), entry.hash, entry.size);
    }
    let _ = writeln!(out, "{},,", csv_field(record_path));
    out
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_owned()
    }
}
