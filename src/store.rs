use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::error::TraitforgeResult;

/// Read-only, path-addressable byte store for image assets.
///
/// Paths are store-relative with `/` separators. The store is assumed
/// immutable for the duration of one generation call.
pub trait AssetStore {
    /// List entry names (not full paths) directly under `path`.
    fn list_entries(&self, path: &str) -> TraitforgeResult<Vec<String>>;

    /// Read the raw bytes of the asset at `path`.
    fn read_bytes(&self, path: &str) -> TraitforgeResult<Vec<u8>>;
}

/// Filesystem-backed [`AssetStore`] rooted at a directory.
#[derive(Clone, Debug)]
pub struct FsAssetStore {
    root: PathBuf,
}

impl FsAssetStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root directory used when resolving store-relative paths.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl AssetStore for FsAssetStore {
    fn list_entries(&self, path: &str) -> TraitforgeResult<Vec<String>> {
        let dir = self.root.join(path);
        let rd = std::fs::read_dir(&dir)
            .with_context(|| format!("list asset dir '{}'", dir.display()))?;

        let mut names = Vec::new();
        for entry in rd {
            let entry =
                entry.with_context(|| format!("read asset dir entry in '{}'", dir.display()))?;
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        Ok(names)
    }

    fn read_bytes(&self, path: &str) -> TraitforgeResult<Vec<u8>> {
        let file = self.root.join(path);
        let bytes = std::fs::read(&file)
            .with_context(|| format!("read asset bytes from '{}'", file.display()))?;
        Ok(bytes)
    }
}
