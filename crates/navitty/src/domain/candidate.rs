use std::path::PathBuf;

/// A single directory entry eligible for matching and display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Candidate {
    /// Whether this entry is a directory.
    pub is_dir: bool,
    /// Entry name within its directory (e.g., `main.rs`).
    pub name: String,
    /// Root-relative path to the entry (e.g., `src/main.rs`).
    pub full_path: PathBuf,
}
