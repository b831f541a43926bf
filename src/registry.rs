use std::path::{Path, PathBuf};

use crate::error::RemapError;
use crate::normalize::normalize;

/// A single symbol → absolute path binding.
#[derive(Debug)]
pub struct AliasEntry {
    pub symbol: String,
    pub absolute_path: PathBuf,
}

/// Ordered symbol → absolute path bindings for a fixed base directory.
///
/// Built once at configuration-load time, read-only afterward. Registration
/// order is preserved; re-registering a symbol overwrites its binding in
/// place (last-write-wins), matching how bundlers merge alias tables.
#[derive(Debug)]
pub struct AliasRegistry {
    base_dir: PathBuf,
    entries: Vec<AliasEntry>,
}

impl AliasRegistry {
    /// Create an empty registry whose targets resolve against `base_dir`.
    pub fn with_base(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            entries: Vec::new(),
        }
    }

    /// Bind `symbol` to `normalize(base_dir/relative_target)`.
    pub fn register(&mut self, symbol: &str, relative_target: &str) -> Result<(), RemapError> {
        if symbol.is_empty() {
            return Err(RemapError::EmptyAlias {
                target: relative_target.to_string(),
            });
        }

        let absolute_path = normalize(&self.base_dir.join(relative_target));

        if let Some(existing) = self.entries.iter_mut().find(|e| e.symbol == symbol) {
            existing.absolute_path = absolute_path;
        } else {
            self.entries.push(AliasEntry {
                symbol: symbol.to_string(),
                absolute_path,
            });
        }
        Ok(())
    }

    /// The path bound to `symbol`, if any.
    pub fn lookup(&self, symbol: &str) -> Option<&Path> {
        self.entries
            .iter()
            .find(|e| e.symbol == symbol)
            .map(|e| e.absolute_path.as_path())
    }

    /// Entries in registration order.
    pub fn entries(&self) -> impl Iterator<Item = &AliasEntry> {
        self.entries.iter()
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
