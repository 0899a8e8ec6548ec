use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::ui::Component;

pub struct StatusBar {
    mode_label: &'static str,
}

impl StatusBar {
    pub fn new(mode_label: &'static str) -> Self {
        Self { mode_label }
    }
}

impl Component for StatusBar {
    fn render(&self, f: &mut Frame, area: Rect) {
        let version = env!("CARGO_PKG_VERSION");
        let left_text = Span::styled(
            format!(" navitty v{version}"),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );
        let right_text = format!("{} ", self.mode_label);
        let left_width = u16::try_from(left_text.width()).unwrap_or(u16::MAX);
        let right_width = u16::try_from(right_text.len()).unwrap_or(u16::MAX);
        let padding = area
            .width
            .saturating_sub(left_width.saturating_add(right_width));
        let status_bar = Paragraph::new(Line::from(vec![
            left_text,
            Span::raw(" ".repeat(padding as usize)),
            Span::styled(right_text, Style::default().fg(Color::Gray)),
        ]))
        .style(Style::default().bg(Color::DarkGray).fg(Color::White));
        f.render_widget(status_bar, area);
    }
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;

    fn buffer_text(buffer: &ratatui::buffer::Buffer) -> String {
        buffer
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn test_render_shows_name_and_mode() {
        // Arrange
        let backend = TestBackend::new(60, 1);
        let mut terminal = Terminal::new(backend).expect("failed to create terminal");
        let status_bar = StatusBar::new("quick open");

        // Act
        terminal
            .draw(|f| {
                let area = f.area();
                status_bar.render(f, area);
            })
            .expect("failed to draw");

        // Assert
        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("navitty v"));
        assert!(text.contains("quick open"));
    }
}
