use serde::{Deserialize, Serialize};
use std::fmt;

/// Export format a model artifact is published in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SourceType {
    ExportedTflite,
    ExportedLinalgMlir,
    ExportedTfV1,
    ExportedTfV2,
}

impl SourceType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ExportedTflite => "exported-tflite",
            Self::ExportedLinalgMlir => "exported-linalg-mlir",
            Self::ExportedTfV1 => "exported-tf-v1",
            Self::ExportedTfV2 => "exported-tf-v2",
        }
    }
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity of a benchmark model.
///
/// Consumers treat it as an opaque value; equality is structural.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModelDescriptor {
    pub id: String,
    pub name: String,
    pub tags: Vec<String>,
    pub source_type: SourceType,
    pub source_url: String,
    pub entry_function: String,
    pub input_types: Vec<String>,
}

impl ModelDescriptor {
    /// Builds a descriptor from borrowed parts.
    #[must_use]
    pub fn new(
        id: &str,
        name: &str,
        tags: &[&str],
        source_type: SourceType,
        source_url: &str,
        entry_function: &str,
        input_types: &[&str],
    ) -> Self {
        Self {
            id: id.to_owned(),
            name: name.to_owned(),
            tags: tags.iter().map(|t| (*t).to_owned()).collect(),
            source_type,
            source_url: source_url.to_owned(),
            entry_function: entry_function.to_owned(),
            input_types: input_types.iter().map(|t| (*t).to_owned()).collect(),
        }
    }
}

impl fmt::Display for ModelDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.tags.is_empty() {
            f.write_str(&self.name)
        } else {
            write!(f, "{} [{}]", self.name, self.tags.join(","))
        }
    }
}
