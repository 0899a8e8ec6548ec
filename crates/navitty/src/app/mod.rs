//! App-layer composition root and shared state container.
//!
//! This module wires app submodules and exposes [`App`] used by runtime mode
//! handlers. All disk mutations go through [`App`] so that each successful
//! change fires exactly one change notification.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, info};

use crate::app::config::Config;
use crate::app::explorer::ExplorerState;
use crate::domain::candidate::Candidate;
use crate::fuzzy;
use crate::infra::fs::{DeleteOptions, Filesystem, FsError, RenameOptions, WriteOptions};
use crate::infra::watch::{ChangeEvent, ChangeKind, ChangeNotifier};
use crate::ui::state::app_mode::AppMode;

pub mod config;
pub mod explorer;
pub mod picker;

/// Returns the navitty home directory (`~/.navitty`).
pub fn navitty_home() -> PathBuf {
    if let Some(home_dir) = dirs::home_dir() {
        return home_dir.join(".navitty");
    }

    PathBuf::from(".navitty")
}

/// Shared application state driven by the runtime event loop.
pub struct App {
    pub mode: AppMode,
    pub explorer: ExplorerState,
    /// Transient message shown in the footer until the next key press.
    pub status: Option<String>,
    config: Config,
    fs: Arc<dyn Filesystem>,
    notifier: ChangeNotifier,
    reload_pending: Arc<AtomicBool>,
    root: PathBuf,
}

impl App {
    /// Creates the app over `fs`, rooted at `root` for display purposes,
    /// and wires the explorer's deferred reload to change notifications.
    pub async fn new(root: PathBuf, config: Config, fs: Arc<dyn Filesystem>) -> Self {
        let explorer = ExplorerState::new(&fs, config.show_hidden).await;
        let reload_pending = Arc::new(AtomicBool::new(false));
        let mut notifier = ChangeNotifier::new();
        let reload_flag = Arc::clone(&reload_pending);
        notifier.register(move |_event| reload_flag.store(true, Ordering::Relaxed));

        Self {
            mode: AppMode::Explorer,
            explorer,
            status: None,
            config,
            fs,
            notifier,
            reload_pending,
            root,
        }
    }

    /// Returns the on-disk directory the app is rooted at.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns whether listings include dot-prefixed entries.
    pub fn show_hidden(&self) -> bool {
        self.config.show_hidden
    }

    /// Returns a handle to the filesystem capability.
    pub fn filesystem(&self) -> Arc<dyn Filesystem> {
        Arc::clone(&self.fs)
    }

    /// Reloads the explorer when a change event arrived since the last
    /// tick.
    pub async fn apply_pending_reload(&mut self) {
        if self.reload_pending.swap(false, Ordering::Relaxed) {
            self.explorer.reload(&self.fs).await;
        }
    }

    /// Creates an empty file at `path`.
    pub async fn create_file(&mut self, path: &Path) -> Result<(), FsError> {
        self.fs
            .write(
                path,
                &[],
                WriteOptions {
                    create: true,
                    overwrite: false,
                },
            )
            .await?;
        info!("created file {}", path.display());
        self.notifier.notify(&ChangeEvent {
            kind: ChangeKind::Created,
            path: path.to_path_buf(),
        });

        Ok(())
    }

    /// Creates a directory at `path`, including missing parents.
    pub async fn create_directory(&mut self, path: &Path) -> Result<(), FsError> {
        self.fs.create_dir(path).await?;
        info!("created directory {}", path.display());
        self.notifier.notify(&ChangeEvent {
            kind: ChangeKind::Created,
            path: path.to_path_buf(),
        });

        Ok(())
    }

    /// Deletes the entry at `path`; directories are removed with their
    /// contents when `recursive` is set.
    pub async fn delete_entry(&mut self, path: &Path, recursive: bool) -> Result<(), FsError> {
        self.fs.delete(path, DeleteOptions { recursive }).await?;
        info!("deleted {}", path.display());
        self.notifier.notify(&ChangeEvent {
            kind: ChangeKind::Deleted,
            path: path.to_path_buf(),
        });

        Ok(())
    }

    /// Renames the entry at `from` to `to` without replacing an existing
    /// target.
    pub async fn rename_entry(&mut self, from: &Path, to: &Path) -> Result<(), FsError> {
        self.fs
            .rename(from, to, RenameOptions { overwrite: false })
            .await?;
        info!("renamed {} to {}", from.display(), to.display());
        self.notifier.notify(&ChangeEvent {
            kind: ChangeKind::Changed,
            path: to.to_path_buf(),
        });

        Ok(())
    }

    /// Records a transient status line shown in the footer.
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some(message.into());
    }

    /// Clears the transient status line.
    pub fn clear_status(&mut self) {
        self.status = None;
    }
}

/// Lists one directory through the filesystem capability and orders the
/// result with directories first.
///
/// A listing failure yields an empty list: the picker treats directories
/// that do not exist yet as empty rather than as errors.
pub(crate) async fn list_directory(
    fs: &Arc<dyn Filesystem>,
    directory: &Path,
    show_hidden: bool,
) -> Vec<Candidate> {
    let entries = match fs.list(directory).await {
        Ok(entries) => entries,
        Err(error) => {
            debug!("listing {} failed: {error}", directory.display());

            return Vec::new();
        }
    };

    let mut candidates: Vec<Candidate> = entries
        .into_iter()
        .filter(|entry| show_hidden || !entry.name.starts_with('.'))
        .map(|entry| Candidate {
            is_dir: entry.is_dir,
            full_path: directory.join(&entry.name),
            name: entry.name,
        })
        .collect();
    fuzzy::sort_candidates(&mut candidates);

    candidates
}

#[cfg(test)]
mod tests {
    use std::io;

    use tempfile::TempDir;

    use super::*;
    use crate::infra::fs::MockFilesystem;
    use crate::infra::fs::local::LocalFs;

    async fn new_test_app() -> (App, TempDir) {
        let base_dir = TempDir::new().expect("failed to create temp dir");
        let root = base_dir.path().to_path_buf();
        let fs: Arc<dyn Filesystem> = Arc::new(LocalFs::new(&root));
        let app = App::new(root, Config::default(), fs).await;

        (app, base_dir)
    }

    #[tokio::test]
    async fn test_create_file_triggers_deferred_reload() {
        // Arrange
        let (mut app, _base_dir) = new_test_app().await;
        assert!(app.explorer.entries().is_empty());

        // Act
        app.create_file(Path::new("fresh.txt"))
            .await
            .expect("failed to create file");
        app.apply_pending_reload().await;

        // Assert
        let names: Vec<&str> = app
            .explorer
            .entries()
            .iter()
            .map(|entry| entry.name.as_str())
            .collect();
        assert_eq!(names, vec!["fresh.txt"]);
    }

    #[tokio::test]
    async fn test_apply_pending_reload_is_a_no_op_without_changes() {
        // Arrange
        let (mut app, base_dir) = new_test_app().await;
        // A file created behind the app's back does not set the flag.
        std::fs::write(base_dir.path().join("external.txt"), "").expect("failed to write");

        // Act
        app.apply_pending_reload().await;

        // Assert
        assert!(app.explorer.entries().is_empty());
    }

    #[tokio::test]
    async fn test_create_directory_then_delete_entry() {
        // Arrange
        let (mut app, _base_dir) = new_test_app().await;

        // Act
        app.create_directory(Path::new("workdir"))
            .await
            .expect("failed to create directory");
        app.create_file(Path::new("workdir/inner.txt"))
            .await
            .expect("failed to create file");
        app.delete_entry(Path::new("workdir"), true)
            .await
            .expect("failed to delete");
        app.apply_pending_reload().await;

        // Assert
        assert!(app.explorer.entries().is_empty());
    }

    #[tokio::test]
    async fn test_rename_entry_moves_the_file() {
        // Arrange
        let (mut app, _base_dir) = new_test_app().await;
        app.create_file(Path::new("before.txt"))
            .await
            .expect("failed to create file");

        // Act
        app.rename_entry(Path::new("before.txt"), Path::new("after.txt"))
            .await
            .expect("failed to rename");
        app.apply_pending_reload().await;

        // Assert
        let names: Vec<&str> = app
            .explorer
            .entries()
            .iter()
            .map(|entry| entry.name.as_str())
            .collect();
        assert_eq!(names, vec!["after.txt"]);
    }

    #[tokio::test]
    async fn test_rename_entry_keeps_existing_target() {
        // Arrange
        let (mut app, _base_dir) = new_test_app().await;
        app.create_file(Path::new("a.txt"))
            .await
            .expect("failed to create file");
        app.create_file(Path::new("b.txt"))
            .await
            .expect("failed to create file");

        // Act
        let result = app
            .rename_entry(Path::new("a.txt"), Path::new("b.txt"))
            .await;

        // Assert
        assert!(matches!(result, Err(FsError::AlreadyExists { .. })));
    }

    #[tokio::test]
    async fn test_create_file_propagates_typed_errors() {
        // Arrange
        let mut mock_fs = MockFilesystem::new();
        mock_fs.expect_list().returning(|_| Ok(Vec::new()));
        mock_fs.expect_write().returning(|path, _, _| {
            Err(FsError::PermissionDenied {
                path: path.to_path_buf(),
            })
        });
        let fs: Arc<dyn Filesystem> = Arc::new(mock_fs);
        let mut app = App::new(PathBuf::from("/"), Config::default(), fs).await;

        // Act
        let result = app.create_file(Path::new("blocked.txt")).await;

        // Assert
        assert!(matches!(result, Err(FsError::PermissionDenied { .. })));
    }

    #[tokio::test]
    async fn test_list_directory_orders_directories_first() {
        // Arrange
        let (app, base_dir) = new_test_app().await;
        std::fs::write(base_dir.path().join("aaa.txt"), "").expect("failed to write");
        std::fs::create_dir(base_dir.path().join("zzz")).expect("failed to create dir");

        // Act
        let candidates = list_directory(&app.filesystem(), Path::new(""), true).await;

        // Assert
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].name, "zzz");
        assert!(candidates[0].is_dir);
        assert_eq!(candidates[1].name, "aaa.txt");
    }

    #[tokio::test]
    async fn test_list_directory_hides_dotfiles_when_configured() {
        // Arrange
        let (app, base_dir) = new_test_app().await;
        std::fs::write(base_dir.path().join(".hidden"), "").expect("failed to write");
        std::fs::write(base_dir.path().join("shown.txt"), "").expect("failed to write");

        // Act
        let candidates = list_directory(&app.filesystem(), Path::new(""), false).await;

        // Assert
        let names: Vec<&str> = candidates
            .iter()
            .map(|candidate| candidate.name.as_str())
            .collect();
        assert_eq!(names, vec!["shown.txt"]);
    }

    #[tokio::test]
    async fn test_list_directory_failure_yields_empty_list() {
        // Arrange
        let mut mock_fs = MockFilesystem::new();
        mock_fs
            .expect_list()
            .returning(|_| Err(FsError::Io(io::Error::other("disk on fire"))));
        let fs: Arc<dyn Filesystem> = Arc::new(mock_fs);

        // Act
        let candidates = list_directory(&fs, Path::new("anywhere"), true).await;

        // Assert
        assert!(candidates.is_empty());
    }

    #[tokio::test]
    async fn test_status_message_lifecycle() {
        // Arrange
        let (mut app, _base_dir) = new_test_app().await;

        // Act & Assert
        app.set_status("Could not create a.txt");
        assert_eq!(app.status.as_deref(), Some("Could not create a.txt"));
        app.clear_status();
        assert!(app.status.is_none());
    }
}
