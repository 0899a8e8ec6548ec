use std::path::Path;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::ui::Component;

/// Single-line overlay for renaming the selected entry.
pub struct RenameOverlay<'a> {
    input: &'a str,
    target: &'a Path,
}

impl<'a> RenameOverlay<'a> {
    pub fn new(input: &'a str, target: &'a Path) -> Self {
        Self { input, target }
    }
}

impl Component for RenameOverlay<'_> {
    fn render(&self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(area);
        let input_area = chunks[1];

        let prefix = format!("Rename {}: ", self.target.display());
        let input_line = Line::from(vec![
            Span::styled(prefix.clone(), Style::default().fg(Color::Cyan)),
            Span::raw(self.input),
        ]);
        f.render_widget(Clear, input_area);
        f.render_widget(Paragraph::new(input_line), input_area);

        let cursor_x = input_area
            .x
            .saturating_add(u16::try_from(prefix.width()).unwrap_or(0))
            .saturating_add(u16::try_from(self.input.width()).unwrap_or(0));
        f.set_cursor_position((cursor_x, input_area.y));
    }
}
