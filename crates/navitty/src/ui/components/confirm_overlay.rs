use std::path::Path;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph};

use crate::ui::Component;

/// Single-line overlay asking to confirm a deletion.
pub struct ConfirmOverlay<'a> {
    path: &'a Path,
    is_dir: bool,
}

impl<'a> ConfirmOverlay<'a> {
    pub fn new(path: &'a Path, is_dir: bool) -> Self {
        Self { path, is_dir }
    }
}

impl Component for ConfirmOverlay<'_> {
    fn render(&self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(area);
        let prompt_area = chunks[1];

        let what = if self.is_dir {
            "directory and its contents"
        } else {
            "file"
        };
        let prompt_line = Line::from(Span::styled(
            format!("Delete {} {}? (y/n)", what, self.path.display()),
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        ));
        f.render_widget(Clear, prompt_area);
        f.render_widget(Paragraph::new(prompt_line), prompt_area);
    }
}
