use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};

use crate::app::explorer::ExplorerState;
use crate::ui::Page;
use crate::ui::icon::Icon;

/// Renders the current directory listing with a file preview panel.
pub struct ExplorerPage<'a> {
    explorer: &'a ExplorerState,
}

impl<'a> ExplorerPage<'a> {
    pub fn new(explorer: &'a ExplorerState) -> Self {
        Self { explorer }
    }

    /// Renders the left-side entry list panel.
    fn render_entry_list(&self, f: &mut Frame, area: Rect) {
        let entries = self.explorer.entries();
        let items: Vec<ListItem<'_>> = if entries.is_empty() {
            vec![ListItem::new(Span::styled(
                "Empty directory",
                Style::default().fg(Color::DarkGray),
            ))]
        } else {
            entries
                .iter()
                .map(|entry| {
                    let suffix = if entry.is_dir { "/" } else { "" };
                    let label = format!(
                        "{} {}{suffix}",
                        Icon::for_entry(entry.is_dir),
                        entry.name
                    );
                    let color = if entry.is_dir {
                        Color::Yellow
                    } else {
                        Color::Cyan
                    };

                    ListItem::new(Span::styled(label, Style::default().fg(color)))
                })
                .collect()
        };

        let mut list_state = ListState::default();
        if !entries.is_empty() {
            list_state.select(Some(
                self.explorer
                    .selected_index()
                    .min(entries.len().saturating_sub(1)),
            ));
        }

        let title = format!(" /{} ", self.explorer.directory().display());
        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(Span::styled(title, Style::default().fg(Color::Cyan))),
            )
            .highlight_style(Style::default().bg(Color::DarkGray));
        f.render_stateful_widget(list, area, &mut list_state);
    }

    /// Renders the right-side preview panel for the selected entry.
    fn render_preview(&self, f: &mut Frame, area: Rect) {
        let selected_path = self
            .explorer
            .selected()
            .map_or_else(String::new, |entry| entry.full_path.display().to_string());
        let header = format!("Path: {selected_path}\n\n");

        let paragraph = Paragraph::new(format!("{header}{}", self.explorer.preview())).block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(" Preview ", Style::default().fg(Color::Yellow))),
        );
        f.render_widget(paragraph, area);
    }
}

impl Page for ExplorerPage<'_> {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let content_layout = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
            .split(area);
        self.render_entry_list(f, content_layout[0]);
        self.render_preview(f, content_layout[1]);
    }
}
