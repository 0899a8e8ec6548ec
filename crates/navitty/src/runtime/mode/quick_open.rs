use std::path::Path;

use crossterm::event::{KeyCode, KeyEvent};
use tracing::warn;

use crate::app::App;
use crate::app::picker::PickerAction;
use crate::runtime::EventResult;
use crate::ui::state::app_mode::AppMode;

/// Handles key input while the app is in `AppMode::QuickOpen`.
pub(crate) async fn handle(app: &mut App, key: KeyEvent) -> EventResult {
    app.clear_status();
    let fs = app.filesystem();

    match key.code {
        KeyCode::Esc => {
            app.mode = AppMode::Explorer;
        }
        KeyCode::Char(character) => {
            if let AppMode::QuickOpen { picker } = &mut app.mode {
                picker.push_char(&fs, character).await;
            }
        }
        KeyCode::Backspace => {
            if let AppMode::QuickOpen { picker } = &mut app.mode {
                picker.backspace(&fs).await;
            }
        }
        KeyCode::Down => {
            if let AppMode::QuickOpen { picker } = &mut app.mode {
                picker.move_selection(1);
            }
        }
        KeyCode::Up => {
            if let AppMode::QuickOpen { picker } = &mut app.mode {
                picker.move_selection(-1);
            }
        }
        KeyCode::Enter => {
            accept(app).await;
        }
        _ => {}
    }

    EventResult::Continue
}

/// Applies the picker's accept decision: descend, reveal, or create.
async fn accept(app: &mut App) {
    let AppMode::QuickOpen { picker } = &app.mode else {
        return;
    };
    let action = picker.accept();
    let fs = app.filesystem();

    match action {
        PickerAction::None => {}
        PickerAction::EnterDirectory(path) => {
            if let AppMode::QuickOpen { picker } = &mut app.mode {
                picker.enter_directory(&fs, &path).await;
            }
        }
        PickerAction::OpenFile(path) => {
            app.mode = AppMode::Explorer;
            app.explorer.reveal(&fs, &path).await;
        }
        PickerAction::CreateFile(path) => match app.create_file(&path).await {
            Ok(()) => {
                app.mode = AppMode::Explorer;
                app.explorer.reveal(&fs, &path).await;
            }
            Err(error) => {
                report_failure(app, "create", &path, &error.to_string());
            }
        },
        PickerAction::CreateDirectory(path) => match app.create_directory(&path).await {
            Ok(()) => {
                if let AppMode::QuickOpen { picker } = &mut app.mode {
                    picker.enter_directory(&fs, &path).await;
                }
            }
            Err(error) => {
                report_failure(app, "create", &path, &error.to_string());
            }
        },
    }
}

/// Logs a failed mutation and surfaces it in the footer.
fn report_failure(app: &mut App, verb: &str, path: &Path, error: &str) {
    warn!("failed to {verb} {}: {error}", path.display());
    app.set_status(format!("Could not {verb} {}: {error}", path.display()));
}
