// SPDX-FileCopyrightText: 2026 Pictor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Directory-backed blob store with path traversal protection.
//!
//! One image file per record, named by the record's blob reference. A
//! reference is a bare file name: anything with separators or parent
//! components is rejected before it touches the filesystem, and read
//! resolution additionally canonicalizes and re-checks containment so a
//! reference can never escape the blob root.

use std::path::{Component, Path, PathBuf};

use tracing::debug;

use pictor_core::PictorError;

/// File-system blob store rooted at a single directory.
pub struct BlobStore {
    root: PathBuf,
}

impl BlobStore {
    /// Open the blob root, creating the directory if needed.
    pub async fn open(root: impl Into<PathBuf>) -> Result<Self, PictorError> {
        let root = root.into();
        tokio::fs::create_dir_all(&root).await.map_err(storage_err)?;
        Ok(Self { root })
    }

    /// The blob root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Write a blob under `name`.
    pub async fn write(&self, name: &str, bytes: &[u8]) -> Result<(), PictorError> {
        check_name(name)?;
        tokio::fs::write(self.root.join(name), bytes)
            .await
            .map_err(storage_err)?;
        debug!(name, len = bytes.len(), "blob written");
        Ok(())
    }

    /// Resolve `name` for read access.
    ///
    /// Canonicalizes both sides and verifies the result still lives under
    /// the blob root, so symlinks cannot smuggle a reference outside it.
    pub async fn resolve(&self, name: &str) -> Result<PathBuf, PictorError> {
        check_name(name)?;
        let root = tokio::fs::canonicalize(&self.root)
            .await
            .map_err(storage_err)?;
        let path = tokio::fs::canonicalize(self.root.join(name))
            .await
            .map_err(storage_err)?;
        if !path.starts_with(&root) {
            return Err(PictorError::Storage {
                source: format!("blob reference `{name}` escapes the blob root").into(),
            });
        }
        Ok(path)
    }

    /// Read a blob's bytes through [`BlobStore::resolve`].
    pub async fn read(&self, name: &str) -> Result<Vec<u8>, PictorError> {
        let path = self.resolve(name).await?;
        tokio::fs::read(path).await.map_err(storage_err)
    }

    /// Remove a blob. A missing file is not an error.
    pub async fn remove(&self, name: &str) -> Result<(), PictorError> {
        check_name(name)?;
        match tokio::fs::remove_file(self.root.join(name)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(name, "blob already absent");
                Ok(())
            }
            Err(e) => Err(storage_err(e)),
        }
    }
}

/// A valid reference is exactly one normal path component.
fn check_name(name: &str) -> Result<(), PictorError> {
    let mut components = Path::new(name).components();
    let valid = matches!(components.next(), Some(Component::Normal(_)))
        && components.next().is_none();
    if !valid {
        return Err(PictorError::Storage {
            source: format!("invalid blob reference `{name}`").into(),
        });
    }
    Ok(())
}

fn storage_err(e: std::io::Error) -> PictorError {
    PictorError::Storage {
        source: Box::new(e),
    }
}
