//! Quick-open/new-file picker state.
//!
//! The picker interprets its input as a root-relative path: the directory
//! part selects which listing to show, the rest fuzzy-filters entry names.
//! Accepting either opens an existing entry or creates the typed path.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::app::list_directory;
use crate::domain::candidate::Candidate;
use crate::fuzzy;
use crate::infra::fs::Filesystem;

/// What the caller should do after the user accepts the picker input.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PickerAction {
    /// Re-list inside the selected directory.
    EnterDirectory(PathBuf),
    /// Reveal an existing file in the explorer.
    OpenFile(PathBuf),
    /// Create an empty file at the typed path, then reveal it.
    CreateFile(PathBuf),
    /// Create a directory at the typed path.
    CreateDirectory(PathBuf),
    /// Nothing to do.
    None,
}

/// State of the quick-open picker overlay.
#[derive(Debug)]
pub struct PickerState {
    input: String,
    items: Vec<Candidate>,
    listed_directory: Option<PathBuf>,
    matches: Vec<Candidate>,
    selected_index: usize,
    show_hidden: bool,
}

impl PickerState {
    /// Opens the picker with an empty input, listing the navigation root.
    pub async fn open(fs: &Arc<dyn Filesystem>, show_hidden: bool) -> Self {
        let mut picker = Self {
            input: String::new(),
            items: Vec::new(),
            listed_directory: None,
            matches: Vec::new(),
            selected_index: 0,
            show_hidden,
        };
        picker.refresh(fs).await;

        picker
    }

    /// Returns the current input value.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Returns the candidates accepted by the current query, in display
    /// order.
    pub fn matches(&self) -> &[Candidate] {
        &self.matches
    }

    /// Returns the index of the highlighted match.
    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    /// Returns the highlighted match, if any.
    pub fn selected(&self) -> Option<&Candidate> {
        self.matches.get(self.selected_index)
    }

    /// Appends one typed character and refreshes the match list.
    pub async fn push_char(&mut self, fs: &Arc<dyn Filesystem>, character: char) {
        self.input.push(character);
        self.refresh(fs).await;
    }

    /// Removes the last typed character and refreshes the match list.
    pub async fn backspace(&mut self, fs: &Arc<dyn Filesystem>) {
        self.input.pop();
        self.refresh(fs).await;
    }

    /// Rewrites the input to `directory/`, descending into it.
    pub async fn enter_directory(&mut self, fs: &Arc<dyn Filesystem>, directory: &Path) {
        self.input = format!("{}/", directory.display());
        self.refresh(fs).await;
    }

    /// Moves the highlight over the match list, clamped to its bounds.
    pub fn move_selection(&mut self, offset: isize) {
        if self.matches.is_empty() {
            return;
        }

        let last_index = self.matches.len().saturating_sub(1);
        self.selected_index = if offset.is_negative() {
            self.selected_index.saturating_sub(offset.unsigned_abs())
        } else {
            self.selected_index
                .saturating_add(offset.unsigned_abs())
                .min(last_index)
        };
    }

    /// Decides the action for the current input and selection.
    ///
    /// A highlighted match wins; otherwise non-empty input means "create
    /// the typed path", with a trailing `/` selecting a directory.
    pub fn accept(&self) -> PickerAction {
        if let Some(candidate) = self.selected() {
            if candidate.is_dir {
                return PickerAction::EnterDirectory(candidate.full_path.clone());
            }

            return PickerAction::OpenFile(candidate.full_path.clone());
        }

        if self.input.is_empty() {
            return PickerAction::None;
        }
        if self.input.ends_with('/') {
            return PickerAction::CreateDirectory(typed_path(&self.input));
        }

        PickerAction::CreateFile(typed_path(&self.input))
    }

    /// Re-lists when the input's directory part changed, then re-filters.
    ///
    /// Match results are recomputed on every keystroke; only the listing of
    /// the unchanged directory is reused.
    async fn refresh(&mut self, fs: &Arc<dyn Filesystem>) {
        let directory = directory_part(&self.input);
        if self.listed_directory.as_deref() != Some(directory.as_path()) {
            self.items = list_directory(fs, &directory, self.show_hidden).await;
            self.listed_directory = Some(directory);
        }

        self.matches = fuzzy::filter_candidates(&self.items, query_part(&self.input))
            .into_iter()
            .cloned()
            .collect();
        self.selected_index = 0;
    }
}

/// Returns the directory part of a typed path: everything up to the last
/// `/`, or the whole input when it ends with one.
fn directory_part(input: &str) -> PathBuf {
    match input.rsplit_once('/') {
        Some((directory, _)) => PathBuf::from(directory),
        None => PathBuf::new(),
    }
}

/// Returns the query part of a typed path: the text after the last `/`.
fn query_part(input: &str) -> &str {
    match input.rsplit_once('/') {
        Some((_, query)) => query,
        None => input,
    }
}

/// Converts the raw input into the path to create.
fn typed_path(input: &str) -> PathBuf {
    PathBuf::from(input.trim_end_matches('/'))
}
