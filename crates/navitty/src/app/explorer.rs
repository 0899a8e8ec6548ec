//! Directory explorer state: one listed directory, a selection, a preview.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::app::list_directory;
use crate::domain::candidate::Candidate;
use crate::infra::fs::Filesystem;

const DIRECTORY_PREVIEW_PREFIX: &str = "Directory:";
const EMPTY_PREVIEW_MESSAGE: &str = "Nothing selected.";

/// Listing, selection and preview for the directory currently shown.
pub struct ExplorerState {
    directory: PathBuf,
    entries: Vec<Candidate>,
    preview: String,
    selected_index: usize,
    show_hidden: bool,
}

impl ExplorerState {
    /// Creates an explorer showing the navigation root.
    pub async fn new(fs: &Arc<dyn Filesystem>, show_hidden: bool) -> Self {
        let mut explorer = Self {
            directory: PathBuf::new(),
            entries: Vec::new(),
            preview: String::new(),
            selected_index: 0,
            show_hidden,
        };
        explorer.reload(fs).await;

        explorer
    }

    /// Returns the root-relative directory currently listed.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Returns the listed entries in display order.
    pub fn entries(&self) -> &[Candidate] {
        &self.entries
    }

    /// Returns the index of the selected entry.
    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    /// Returns the selected entry, if any.
    pub fn selected(&self) -> Option<&Candidate> {
        self.entries.get(self.selected_index)
    }

    /// Returns the preview text for the selected entry.
    pub fn preview(&self) -> &str {
        &self.preview
    }

    /// Re-lists the current directory, keeping the selection on the same
    /// entry name when it still exists.
    pub async fn reload(&mut self, fs: &Arc<dyn Filesystem>) {
        let selected_name = self.selected().map(|entry| entry.name.clone());
        self.entries = list_directory(fs, &self.directory, self.show_hidden).await;
        self.selected_index = selected_name
            .and_then(|name| self.position_of(&name))
            .unwrap_or(0)
            .min(self.entries.len().saturating_sub(1));
        self.load_preview(fs).await;
    }

    /// Moves the selection by `offset` entries and refreshes the preview.
    pub async fn move_selection(&mut self, fs: &Arc<dyn Filesystem>, offset: isize) {
        if self.entries.is_empty() {
            return;
        }

        let last_index = self.entries.len().saturating_sub(1);
        let next_index = if offset.is_negative() {
            self.selected_index.saturating_sub(offset.unsigned_abs())
        } else {
            self.selected_index
                .saturating_add(offset.unsigned_abs())
                .min(last_index)
        };
        if next_index == self.selected_index {
            return;
        }

        self.selected_index = next_index;
        self.load_preview(fs).await;
    }

    /// Descends into the selected entry when it is a directory.
    pub async fn enter_selected(&mut self, fs: &Arc<dyn Filesystem>) {
        let Some(target) = self
            .selected()
            .filter(|entry| entry.is_dir)
            .map(|entry| entry.full_path.clone())
        else {
            return;
        };

        self.directory = target;
        self.entries = list_directory(fs, &self.directory, self.show_hidden).await;
        self.selected_index = 0;
        self.load_preview(fs).await;
    }

    /// Moves to the parent directory, selecting the directory just left.
    ///
    /// Does nothing at the navigation root.
    pub async fn go_to_parent(&mut self, fs: &Arc<dyn Filesystem>) {
        let previous_name = self
            .directory
            .file_name()
            .map(|name| name.to_string_lossy().into_owned());
        if !self.directory.pop() {
            return;
        }

        self.entries = list_directory(fs, &self.directory, self.show_hidden).await;
        self.selected_index = previous_name
            .and_then(|name| self.position_of(&name))
            .unwrap_or(0);
        self.load_preview(fs).await;
    }

    /// Shows the directory containing `path` with that entry selected.
    pub async fn reveal(&mut self, fs: &Arc<dyn Filesystem>, path: &Path) {
        self.directory = path.parent().map(Path::to_path_buf).unwrap_or_default();
        self.entries = list_directory(fs, &self.directory, self.show_hidden).await;
        let target_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned());
        self.selected_index = target_name
            .and_then(|name| self.position_of(&name))
            .unwrap_or(0);
        self.load_preview(fs).await;
    }

    fn position_of(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.name == name)
    }

    async fn load_preview(&mut self, fs: &Arc<dyn Filesystem>) {
        let preview = build_preview(fs, self.entries.get(self.selected_index)).await;
        self.preview = preview;
    }
}

/// Builds preview content for one selected entry.
async fn build_preview(fs: &Arc<dyn Filesystem>, selected: Option<&Candidate>) -> String {
    let Some(entry) = selected else {
        return EMPTY_PREVIEW_MESSAGE.to_string();
    };
    if entry.is_dir {
        return format!("{DIRECTORY_PREVIEW_PREFIX} {}", entry.name);
    }

    match fs.read(&entry.full_path).await {
        Ok(data) => String::from_utf8_lossy(&data).into_owned(),
        Err(error) => format!("Failed to read `{}`: {error}", entry.name),
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::infra::fs::local::LocalFs;

    async fn explorer_over(
        layout: &[(&str, &str)],
    ) -> (ExplorerState, Arc<dyn Filesystem>, TempDir) {
        let base_dir = TempDir::new().expect("failed to create temp dir");
        for (entry, contents) in layout {
            if let Some(directory) = entry.strip_suffix('/') {
                std::fs::create_dir_all(base_dir.path().join(directory))
                    .expect("failed to create dir");
            } else {
                if let Some(parent) = Path::new(entry).parent() {
                    std::fs::create_dir_all(base_dir.path().join(parent))
                        .expect("failed to create parent");
                }
                std::fs::write(base_dir.path().join(entry), contents).expect("failed to write");
            }
        }
        let fs: Arc<dyn Filesystem> = Arc::new(LocalFs::new(base_dir.path()));
        let explorer = ExplorerState::new(&fs, true).await;

        (explorer, fs, base_dir)
    }

    fn entry_names(explorer: &ExplorerState) -> Vec<&str> {
        explorer
            .entries()
            .iter()
            .map(|entry| entry.name.as_str())
            .collect()
    }

    #[tokio::test]
    async fn test_new_lists_root_with_directories_first() {
        // Arrange & Act
        let (explorer, _fs, _base_dir) =
            explorer_over(&[("b.txt", ""), ("src/", ""), ("a.txt", "")]).await;

        // Assert
        assert_eq!(entry_names(&explorer), vec!["src", "a.txt", "b.txt"]);
        assert_eq!(explorer.selected_index(), 0);
    }

    #[tokio::test]
    async fn test_empty_directory_has_placeholder_preview() {
        // Arrange & Act
        let (explorer, _fs, _base_dir) = explorer_over(&[]).await;

        // Assert
        assert!(explorer.entries().is_empty());
        assert_eq!(explorer.preview(), EMPTY_PREVIEW_MESSAGE);
    }

    #[tokio::test]
    async fn test_move_selection_loads_file_preview() {
        // Arrange
        let (mut explorer, fs, _base_dir) =
            explorer_over(&[("a.txt", "alpha"), ("b.txt", "beta")]).await;

        // Act
        explorer.move_selection(&fs, 1).await;

        // Assert
        assert_eq!(explorer.selected_index(), 1);
        assert_eq!(explorer.preview(), "beta");
    }

    #[tokio::test]
    async fn test_move_selection_clamps_at_the_edges() {
        // Arrange
        let (mut explorer, fs, _base_dir) = explorer_over(&[("a.txt", ""), ("b.txt", "")]).await;

        // Act
        explorer.move_selection(&fs, 10).await;
        explorer.move_selection(&fs, -10).await;

        // Assert
        assert_eq!(explorer.selected_index(), 0);
    }

    #[tokio::test]
    async fn test_directory_selection_shows_directory_preview() {
        // Arrange & Act
        let (explorer, _fs, _base_dir) = explorer_over(&[("src/", ""), ("a.txt", "")]).await;

        // Assert
        assert_eq!(explorer.preview(), "Directory: src");
    }

    #[tokio::test]
    async fn test_enter_selected_descends_into_directory() {
        // Arrange
        let (mut explorer, fs, _base_dir) =
            explorer_over(&[("src/", ""), ("src/main.rs", "fn main() {}")]).await;

        // Act
        explorer.enter_selected(&fs).await;

        // Assert
        assert_eq!(explorer.directory(), Path::new("src"));
        assert_eq!(entry_names(&explorer), vec!["main.rs"]);
        assert_eq!(explorer.preview(), "fn main() {}");
    }

    #[tokio::test]
    async fn test_enter_selected_on_a_file_is_a_no_op() {
        // Arrange
        let (mut explorer, fs, _base_dir) = explorer_over(&[("a.txt", "alpha")]).await;

        // Act
        explorer.enter_selected(&fs).await;

        // Assert
        assert_eq!(explorer.directory(), Path::new(""));
        assert_eq!(entry_names(&explorer), vec!["a.txt"]);
    }

    #[tokio::test]
    async fn test_go_to_parent_selects_the_directory_left_behind() {
        // Arrange
        let (mut explorer, fs, _base_dir) =
            explorer_over(&[("src/", ""), ("src/main.rs", ""), ("a.txt", "")]).await;
        explorer.enter_selected(&fs).await;

        // Act
        explorer.go_to_parent(&fs).await;

        // Assert
        assert_eq!(explorer.directory(), Path::new(""));
        assert_eq!(
            explorer.selected().map(|entry| entry.name.as_str()),
            Some("src")
        );
    }

    #[tokio::test]
    async fn test_go_to_parent_stops_at_the_root() {
        // Arrange
        let (mut explorer, fs, _base_dir) = explorer_over(&[("a.txt", "")]).await;

        // Act
        explorer.go_to_parent(&fs).await;

        // Assert
        assert_eq!(explorer.directory(), Path::new(""));
        assert_eq!(entry_names(&explorer), vec!["a.txt"]);
    }

    #[tokio::test]
    async fn test_reveal_selects_the_target_file() {
        // Arrange
        let (mut explorer, fs, _base_dir) = explorer_over(&[
            ("src/lib.rs", "pub mod app;"),
            ("src/app.rs", ""),
            ("a.txt", ""),
        ])
        .await;

        // Act
        explorer.reveal(&fs, Path::new("src/lib.rs")).await;

        // Assert
        assert_eq!(explorer.directory(), Path::new("src"));
        assert_eq!(
            explorer.selected().map(|entry| entry.name.as_str()),
            Some("lib.rs")
        );
        assert_eq!(explorer.preview(), "pub mod app;");
    }

    #[tokio::test]
    async fn test_reload_preserves_selection_by_name() {
        // Arrange
        let (mut explorer, fs, base_dir) = explorer_over(&[("a.txt", ""), ("c.txt", "")]).await;
        explorer.move_selection(&fs, 1).await;
        std::fs::write(base_dir.path().join("b.txt"), "").expect("failed to write");

        // Act
        explorer.reload(&fs).await;

        // Assert — "c.txt" shifted to index 2 but stays selected
        assert_eq!(entry_names(&explorer), vec!["a.txt", "b.txt", "c.txt"]);
        assert_eq!(
            explorer.selected().map(|entry| entry.name.as_str()),
            Some("c.txt")
        );
    }

    #[tokio::test]
    async fn test_reload_clamps_when_entries_disappear() {
        // Arrange
        let (mut explorer, fs, base_dir) = explorer_over(&[("a.txt", ""), ("b.txt", "")]).await;
        explorer.move_selection(&fs, 1).await;
        std::fs::remove_file(base_dir.path().join("b.txt")).expect("failed to remove");

        // Act
        explorer.reload(&fs).await;

        // Assert
        assert_eq!(entry_names(&explorer), vec!["a.txt"]);
        assert_eq!(explorer.selected_index(), 0);
    }
}
