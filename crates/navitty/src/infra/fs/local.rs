//! Local-disk implementation of the filesystem capability.

use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use crate::infra::fs::{DeleteOptions, Filesystem, FsEntry, FsError, RenameOptions, WriteOptions};

/// Filesystem rooted at a directory on the local disk.
///
/// Trait paths resolve inside `root`; `..` components that would climb above
/// it are rejected with [`FsError::OutsideRoot`], and a leading `/` is
/// treated as the root itself.
#[derive(Clone, Debug)]
pub struct LocalFs {
    root: PathBuf,
}

impl LocalFs {
    /// Creates a local filesystem rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Returns the root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolves a root-relative path to an on-disk path, normalizing `.`
    /// and `..` components without touching the disk.
    fn resolve(&self, path: &Path) -> Result<PathBuf, FsError> {
        let mut resolved = self.root.clone();

        for component in path.components() {
            match component {
                Component::Normal(part) => resolved.push(part),
                Component::ParentDir => {
                    if resolved == self.root {
                        return Err(FsError::OutsideRoot {
                            path: path.to_path_buf(),
                        });
                    }
                    resolved.pop();
                }
                Component::CurDir | Component::RootDir => {}
                Component::Prefix(_) => {
                    return Err(FsError::OutsideRoot {
                        path: path.to_path_buf(),
                    });
                }
            }
        }

        Ok(resolved)
    }
}

#[async_trait]
impl Filesystem for LocalFs {
    async fn list(&self, path: &Path) -> Result<Vec<FsEntry>, FsError> {
        let full_path = self.resolve(path)?;
        let mut dir = fs::read_dir(&full_path)
            .await
            .map_err(|error| FsError::from_io(error, path))?;
        let mut entries = Vec::new();

        while let Some(entry) = dir
            .next_entry()
            .await
            .map_err(|error| FsError::from_io(error, path))?
        {
            let file_type = entry
                .file_type()
                .await
                .map_err(|error| FsError::from_io(error, path))?;

            entries.push(FsEntry {
                is_dir: file_type.is_dir(),
                name: entry.file_name().to_string_lossy().into_owned(),
            });
        }

        Ok(entries)
    }

    async fn read(&self, path: &Path) -> Result<Vec<u8>, FsError> {
        let full_path = self.resolve(path)?;

        fs::read(&full_path)
            .await
            .map_err(|error| FsError::from_io(error, path))
    }

    async fn write(&self, path: &Path, data: &[u8], options: WriteOptions) -> Result<(), FsError> {
        let full_path = self.resolve(path)?;
        let exists = fs::metadata(&full_path).await.is_ok();

        if !exists && !options.create {
            return Err(FsError::NotFound {
                path: path.to_path_buf(),
            });
        }
        if exists && !options.overwrite {
            return Err(FsError::AlreadyExists {
                path: path.to_path_buf(),
            });
        }
        if !exists && let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|error| FsError::from_io(error, path))?;
        }

        fs::write(&full_path, data)
            .await
            .map_err(|error| FsError::from_io(error, path))
    }

    async fn create_dir(&self, path: &Path) -> Result<(), FsError> {
        let full_path = self.resolve(path)?;

        fs::create_dir_all(&full_path)
            .await
            .map_err(|error| FsError::from_io(error, path))
    }

    async fn delete(&self, path: &Path, options: DeleteOptions) -> Result<(), FsError> {
        let full_path = self.resolve(path)?;
        let metadata = fs::metadata(&full_path)
            .await
            .map_err(|error| FsError::from_io(error, path))?;

        let result = if metadata.is_dir() {
            if options.recursive {
                fs::remove_dir_all(&full_path).await
            } else {
                fs::remove_dir(&full_path).await
            }
        } else {
            fs::remove_file(&full_path).await
        };

        result.map_err(|error| FsError::from_io(error, path))
    }

    async fn rename(&self, from: &Path, to: &Path, options: RenameOptions) -> Result<(), FsError> {
        let from_path = self.resolve(from)?;
        let to_path = self.resolve(to)?;

        if let Ok(metadata) = fs::metadata(&to_path).await {
            if !options.overwrite {
                return Err(FsError::AlreadyExists {
                    path: to.to_path_buf(),
                });
            }
            let removal = if metadata.is_dir() {
                fs::remove_dir_all(&to_path).await
            } else {
                fs::remove_file(&to_path).await
            };
            removal.map_err(|error| FsError::from_io(error, to))?;
        }

        if let Some(parent) = to_path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|error| FsError::from_io(error, to))?;
        }

        fs::rename(&from_path, &to_path)
            .await
            .map_err(|error| FsError::from_io(error, from))
    }

    async fn stat(&self, path: &Path) -> Result<FsEntry, FsError> {
        let full_path = self.resolve(path)?;
        let metadata = fs::metadata(&full_path)
            .await
            .map_err(|error| FsError::from_io(error, path))?;
        let name = path
            .file_name()
            .map_or_else(|| "/".to_string(), |name| name.to_string_lossy().into_owned());

        Ok(FsEntry {
            is_dir: metadata.is_dir(),
            name,
        })
    }
}
