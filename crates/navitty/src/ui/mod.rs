pub mod components;
pub mod icon;
pub mod pages;
pub mod state;

use std::path::Path;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

use crate::app::explorer::ExplorerState;
use crate::ui::state::app_mode::AppMode;

/// A trait for UI pages that enforces a standard rendering interface.
pub trait Page {
    fn render(&mut self, f: &mut Frame, area: Rect);
}

/// A trait for UI components that enforces a standard rendering interface.
pub trait Component {
    fn render(&self, f: &mut Frame, area: Rect);
}

pub struct RenderContext<'a> {
    pub explorer: &'a ExplorerState,
    pub mode: &'a AppMode,
    pub root: &'a Path,
    pub status: Option<&'a str>,
}

pub fn render(f: &mut Frame, context: RenderContext<'_>) {
    let RenderContext {
        explorer,
        mode,
        root,
        status,
    } = context;

    let area = f.area();

    // Three-section layout: top status bar, content area, footer bar
    let outer_chunks = Layout::default()
        .constraints([
            Constraint::Length(1), // Top status bar
            Constraint::Min(0),    // Content area
            Constraint::Length(1), // Footer bar
        ])
        .split(area);

    let status_bar_area = outer_chunks[0];
    let content_area = outer_chunks[1];
    let footer_bar_area = outer_chunks[2];

    components::status_bar::StatusBar::new(mode.label()).render(f, status_bar_area);

    // The explorer page is always the background; overlays draw on top.
    let mut explorer_page = pages::explorer::ExplorerPage::new(explorer);
    explorer_page.render(f, content_area);

    match mode {
        AppMode::Explorer => {}
        AppMode::QuickOpen { picker } => {
            components::picker_overlay::PickerOverlay::new(picker).render(f, content_area);
        }
        AppMode::Rename { input, target } => {
            components::rename_overlay::RenameOverlay::new(input, target).render(f, content_area);
        }
        AppMode::ConfirmDelete { path, is_dir } => {
            components::confirm_overlay::ConfirmOverlay::new(path, *is_dir).render(f, content_area);
        }
    }

    components::footer_bar::FooterBar::new(
        display_location(root, explorer.directory()),
        status.map(std::string::ToString::to_string),
        mode.footer_hints(),
    )
    .render(f, footer_bar_area);
}

/// Formats the browsed directory for the footer, shortening the home
/// directory to `~`.
fn display_location(root: &Path, directory: &Path) -> String {
    let location = root.join(directory);

    if let Some(home) = dirs::home_dir()
        && let Ok(relative) = location.strip_prefix(&home)
    {
        return format!("~/{}", relative.display());
    }

    location.display().to_string()
}
