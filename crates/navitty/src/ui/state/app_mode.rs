use std::path::PathBuf;

use crate::app::picker::PickerState;

/// Top-level input mode; each variant has a dedicated key handler.
#[derive(Debug)]
pub enum AppMode {
    /// Browsing the current directory listing.
    Explorer,
    /// Quick-open/new-file picker overlay.
    QuickOpen { picker: PickerState },
    /// Renaming `target` via a text overlay seeded with its current name.
    Rename { input: String, target: PathBuf },
    /// Confirming deletion of the selected entry.
    ConfirmDelete { path: PathBuf, is_dir: bool },
}

impl AppMode {
    /// Returns the short mode name shown in the status bar.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Explorer => "explorer",
            Self::QuickOpen { .. } => "quick open",
            Self::Rename { .. } => "rename",
            Self::ConfirmDelete { .. } => "delete",
        }
    }

    /// Returns the footer key hints for this mode.
    pub fn footer_hints(&self) -> &'static str {
        match self {
            Self::Explorer => "j/k: select  enter: open  h: up  n: new/open  r: rename  d: delete  q: quit",
            Self::QuickOpen { .. } => "type to filter  up/down: select  enter: accept  esc: close",
            Self::Rename { .. } => "enter: apply  esc: cancel",
            Self::ConfirmDelete { .. } => "y: delete  n: cancel",
        }
    }
}
