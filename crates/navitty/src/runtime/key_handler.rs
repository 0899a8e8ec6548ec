use crossterm::event::KeyEvent;

use crate::app::App;
use crate::runtime::{EventResult, mode};
use crate::ui::state::app_mode::AppMode;

pub(crate) async fn handle_key_event(app: &mut App, key: KeyEvent) -> EventResult {
    match &app.mode {
        AppMode::Explorer => mode::explorer::handle(app, key).await,
        AppMode::QuickOpen { .. } => mode::quick_open::handle(app, key).await,
        AppMode::Rename { .. } => mode::rename::handle(app, key).await,
        AppMode::ConfirmDelete { .. } => mode::delete_confirmation::handle(app, key).await,
    }
}
