use crossterm::event::{KeyCode, KeyEvent};
use tracing::warn;

use crate::app::App;
use crate::runtime::EventResult;
use crate::ui::state::app_mode::AppMode;

/// Handles key input while the app is in `AppMode::ConfirmDelete`.
pub(crate) async fn handle(app: &mut App, key: KeyEvent) -> EventResult {
    app.clear_status();

    match key.code {
        KeyCode::Char('y') => {
            confirm(app).await;
        }
        KeyCode::Char('n') | KeyCode::Esc => {
            app.mode = AppMode::Explorer;
        }
        _ => {}
    }

    EventResult::Continue
}

/// Deletes the confirmed entry; directories go with their contents.
async fn confirm(app: &mut App) {
    let AppMode::ConfirmDelete { path, is_dir } = &app.mode else {
        return;
    };
    let path = path.clone();
    let recursive = *is_dir;

    app.mode = AppMode::Explorer;
    if let Err(error) = app.delete_entry(&path, recursive).await {
        warn!("failed to delete {}: {error}", path.display());
        app.set_status(format!("Could not delete {}: {error}", path.display()));
    }
}
