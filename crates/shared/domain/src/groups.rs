//! Named groups of benchmark models.
//!
//! Groups are declared once, in order, and never mutated afterwards. The
//! aggregate [`ALL`] group is not stored: it is recomputed on every read as the
//! concatenation of the declared groups, so it cannot drift from them.

use crate::catalog;
use crate::constants::{ALL, LARGE, SMALL};
use crate::models::ModelDescriptor;
use serde::Serialize;
use std::sync::LazyLock;

static BUILTIN: LazyLock<ModelGroups> = LazyLock::new(catalog::builtin_groups);

/// A named, ordered sequence of models.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelGroup {
    pub name: String,
    pub models: Vec<ModelDescriptor>,
}

impl ModelGroup {
    #[must_use]
    pub fn new(name: impl Into<String>, models: Vec<ModelDescriptor>) -> Self {
        Self { name: name.into(), models }
    }
}

/// Read-only registry of declared model groups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelGroups {
    declared: Vec<ModelGroup>,
}

impl ModelGroups {
    /// Builds a registry from groups in declaration order.
    ///
    /// A declared group named [`ALL`] is dropped: the name always resolves to
    /// the derived aggregate and never contributes to it.
    #[must_use]
    pub fn new(mut declared: Vec<ModelGroup>) -> Self {
        declared.retain(|g| g.name != ALL);
        Self { declared }
    }

    /// The registry built from the builtin catalog. Initialized on first use.
    #[must_use]
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    /// Declared groups in declaration order (the aggregate is not included).
    pub fn declared(&self) -> impl Iterator<Item = &ModelGroup> {
        self.declared.iter()
    }

    /// Group names in declaration order, followed by [`ALL`].
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.declared.iter().map(|g| g.name.as_str()).chain(std::iter::once(ALL)).collect()
    }

    #[must_use]
    pub fn small(&self) -> &[ModelDescriptor] {
        self.declared_models(SMALL)
    }

    #[must_use]
    pub fn large(&self) -> &[ModelDescriptor] {
        self.declared_models(LARGE)
    }

    /// Every declared group concatenated in declaration order, duplicates kept.
    #[must_use]
    pub fn all(&self) -> Vec<&ModelDescriptor> {
        self.declared.iter().flat_map(|g| g.models.iter()).collect()
    }

    /// Looks a group up by name; [`ALL`] resolves to [`ModelGroups::all`].
    #[must_use]
    pub fn group(&self, name: &str) -> Option<Vec<&ModelDescriptor>> {
        if name == ALL {
            return Some(self.all());
        }
        self.declared.iter().find(|g| g.name == name).map(|g| g.models.iter().collect())
    }

    fn declared_models(&self, name: &str) -> &[ModelDescriptor] {
        self.declared.iter().find(|g| g.name == name).map_or(&[], |g| g.models.as_slice())
    }
}
