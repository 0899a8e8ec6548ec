use std::path::{Path, PathBuf};

use crossterm::event::{KeyCode, KeyEvent};
use tracing::warn;

use crate::app::App;
use crate::runtime::EventResult;
use crate::ui::state::app_mode::AppMode;

/// Handles key input while the app is in `AppMode::Rename`.
pub(crate) async fn handle(app: &mut App, key: KeyEvent) -> EventResult {
    app.clear_status();

    match key.code {
        KeyCode::Esc => {
            app.mode = AppMode::Explorer;
        }
        KeyCode::Char(character) => {
            if let AppMode::Rename { input, .. } = &mut app.mode {
                input.push(character);
            }
        }
        KeyCode::Backspace => {
            if let AppMode::Rename { input, .. } = &mut app.mode {
                input.pop();
            }
        }
        KeyCode::Enter => {
            submit(app).await;
        }
        _ => {}
    }

    EventResult::Continue
}

/// Applies the rename; a failure keeps the overlay open with a status
/// message so the user can correct the name.
async fn submit(app: &mut App) {
    let AppMode::Rename { input, target } = &app.mode else {
        return;
    };
    let input = input.clone();
    let target = target.clone();

    let current_name = target.file_name().map(std::ffi::OsStr::to_string_lossy);
    if input.is_empty() || current_name.as_deref() == Some(input.as_str()) {
        app.mode = AppMode::Explorer;

        return;
    }

    let renamed = rename_destination(&target, &input);
    match app.rename_entry(&target, &renamed).await {
        Ok(()) => {
            app.mode = AppMode::Explorer;
            let fs = app.filesystem();
            app.explorer.reveal(&fs, &renamed).await;
        }
        Err(error) => {
            warn!("failed to rename {}: {error}", target.display());
            app.set_status(format!("Could not rename to {input}: {error}"));
        }
    }
}

/// Builds the target path for a new name within the same directory.
fn rename_destination(target: &Path, new_name: &str) -> PathBuf {
    target
        .parent()
        .unwrap_or_else(|| Path::new(""))
        .join(new_name)
}
