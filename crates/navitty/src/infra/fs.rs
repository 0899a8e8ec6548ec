//! Filesystem capability interface and its typed errors.
//!
//! The explorer and picker never touch the disk directly; every operation
//! goes through [`Filesystem`] so the rest of the app stays host-independent
//! and testable against a mock.

use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use thiserror::Error;

pub mod local;

/// Typed failures for [`Filesystem`] operations.
#[derive(Debug, Error)]
pub enum FsError {
    #[error("entry not found: {}", .path.display())]
    NotFound { path: PathBuf },
    #[error("entry already exists: {}", .path.display())]
    AlreadyExists { path: PathBuf },
    #[error("entry is a directory: {}", .path.display())]
    IsADirectory { path: PathBuf },
    #[error("entry is not a directory: {}", .path.display())]
    NotADirectory { path: PathBuf },
    #[error("permission denied: {}", .path.display())]
    PermissionDenied { path: PathBuf },
    #[error("path escapes the navigation root: {}", .path.display())]
    OutsideRoot { path: PathBuf },
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl FsError {
    /// Classifies an OS error for `path` into a typed variant, keeping the
    /// raw error only when no variant applies.
    pub fn from_io(error: io::Error, path: &Path) -> Self {
        let path = path.to_path_buf();

        match error.kind() {
            io::ErrorKind::NotFound => Self::NotFound { path },
            io::ErrorKind::AlreadyExists => Self::AlreadyExists { path },
            io::ErrorKind::IsADirectory => Self::IsADirectory { path },
            io::ErrorKind::NotADirectory => Self::NotADirectory { path },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            _ => Self::Io(error),
        }
    }
}

/// Name and kind of one directory entry as reported by a listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FsEntry {
    /// Whether this entry is a directory.
    pub is_dir: bool,
    /// Entry name within its directory (not a path).
    pub name: String,
}

/// Controls file creation and replacement in [`Filesystem::write`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct WriteOptions {
    /// Create the file (and missing parent directories) when it does not
    /// exist.
    pub create: bool,
    /// Replace the contents of an existing file.
    pub overwrite: bool,
}

/// Controls directory removal in [`Filesystem::delete`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct DeleteOptions {
    /// Remove a directory together with its contents.
    pub recursive: bool,
}

/// Controls target replacement in [`Filesystem::rename`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct RenameOptions {
    /// Replace an existing entry at the target path.
    pub overwrite: bool,
}

/// Host-independent filesystem operations.
///
/// All paths are relative to the implementation's root.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait Filesystem: Send + Sync {
    /// Lists the entries of a directory.
    async fn list(&self, path: &Path) -> Result<Vec<FsEntry>, FsError>;

    /// Reads the entire contents of a file.
    async fn read(&self, path: &Path) -> Result<Vec<u8>, FsError>;

    /// Writes `data` to a file subject to `options`.
    ///
    /// Fails with [`FsError::NotFound`] when the file is missing and
    /// `create` is not set, and with [`FsError::AlreadyExists`] when the
    /// file exists and `overwrite` is not set.
    async fn write(&self, path: &Path, data: &[u8], options: WriteOptions) -> Result<(), FsError>;

    /// Creates a directory, including missing parents.
    async fn create_dir(&self, path: &Path) -> Result<(), FsError>;

    /// Deletes a file or directory.
    ///
    /// A non-empty directory is only removed when `recursive` is set.
    async fn delete(&self, path: &Path, options: DeleteOptions) -> Result<(), FsError>;

    /// Renames (moves) an entry.
    ///
    /// Fails with [`FsError::AlreadyExists`] when the target exists and
    /// `overwrite` is not set; with `overwrite` the target is replaced.
    async fn rename(&self, from: &Path, to: &Path, options: RenameOptions) -> Result<(), FsError>;

    /// Returns metadata for a single entry.
    async fn stat(&self, path: &Path) -> Result<FsEntry, FsError>;

    /// Returns true when `path` exists.
    async fn exists(&self, path: &Path) -> bool {
        self.stat(path).await.is_ok()
    }
}
