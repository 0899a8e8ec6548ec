use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::ui::Component;

pub struct FooterBar {
    location: String,
    status: Option<String>,
    hints: &'static str,
}

impl FooterBar {
    pub fn new(location: String, status: Option<String>, hints: &'static str) -> Self {
        Self {
            location,
            status,
            hints,
        }
    }
}

impl Component for FooterBar {
    fn render(&self, f: &mut Frame, area: Rect) {
        let left_text = format!(" {}", self.location);
        let left = Span::styled(
            left_text.clone(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::DIM),
        );

        // A transient status message displaces the key hints.
        let (right_text, right_style) = match &self.status {
            Some(status) => (
                format!("{status} "),
                Style::default().fg(Color::Yellow),
            ),
            None => (
                format!("{} ", self.hints),
                Style::default().fg(Color::Gray),
            ),
        };

        let mut spans = vec![left];
        let left_width = left_text.width();
        let right_width = right_text.width();
        let total_width = area.width as usize;
        if left_width + right_width < total_width {
            spans.push(Span::raw(" ".repeat(total_width - left_width - right_width)));
            spans.push(Span::styled(right_text, right_style));
        }

        let footer = Paragraph::new(Line::from(spans))
            .style(Style::default().bg(Color::DarkGray).fg(Color::White));

        f.render_widget(footer, area);
    }
}
