use crossterm::event::{KeyCode, KeyEvent};

use crate::app::App;
use crate::app::picker::PickerState;
use crate::runtime::EventResult;
use crate::ui::state::app_mode::AppMode;

/// Handles key input while the app is in `AppMode::Explorer`.
pub(crate) async fn handle(app: &mut App, key: KeyEvent) -> EventResult {
    app.clear_status();
    let fs = app.filesystem();

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            return EventResult::Quit;
        }
        KeyCode::Char('j') | KeyCode::Down => {
            app.explorer.move_selection(&fs, 1).await;
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.explorer.move_selection(&fs, -1).await;
        }
        KeyCode::Char('l') | KeyCode::Enter => {
            app.explorer.enter_selected(&fs).await;
        }
        KeyCode::Char('h') | KeyCode::Backspace => {
            app.explorer.go_to_parent(&fs).await;
        }
        KeyCode::Char('n') => {
            let picker = PickerState::open(&fs, app.show_hidden()).await;
            app.mode = AppMode::QuickOpen { picker };
        }
        KeyCode::Char('r') => {
            open_rename(app);
        }
        KeyCode::Char('d') => {
            open_delete_confirmation(app);
        }
        _ => {}
    }

    EventResult::Continue
}

/// Opens the rename overlay seeded with the selected entry's name.
fn open_rename(app: &mut App) {
    let Some(selected) = app.explorer.selected() else {
        return;
    };

    app.mode = AppMode::Rename {
        input: selected.name.clone(),
        target: selected.full_path.clone(),
    };
}

/// Asks for confirmation before deleting the selected entry.
fn open_delete_confirmation(app: &mut App) {
    let Some(selected) = app.explorer.selected() else {
        return;
    };

    app.mode = AppMode::ConfirmDelete {
        path: selected.full_path.clone(),
        is_dir: selected.is_dir,
    };
}
