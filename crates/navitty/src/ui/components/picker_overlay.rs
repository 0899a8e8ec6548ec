use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::app::picker::PickerState;
use crate::ui::Component;
use crate::ui::icon::Icon;

const INPUT_PREFIX: &str = "> ";
const MAX_VISIBLE_MATCHES: usize = 10;

/// Quick-open overlay: a match dropdown above a single input line.
pub struct PickerOverlay<'a> {
    picker: &'a PickerState,
}

impl<'a> PickerOverlay<'a> {
    pub fn new(picker: &'a PickerState) -> Self {
        Self { picker }
    }

    /// Returns the window of match indexes kept visible around the
    /// selection.
    fn visible_range(&self) -> std::ops::Range<usize> {
        let match_count = self.picker.matches().len();
        let visible = match_count.min(MAX_VISIBLE_MATCHES);
        let first = self
            .picker
            .selected_index()
            .saturating_sub(visible.saturating_sub(1))
            .min(match_count.saturating_sub(visible));

        first..first + visible
    }
}

impl Component for PickerOverlay<'_> {
    fn render(&self, f: &mut Frame, area: Rect) {
        let matches = self.picker.matches();
        let visible_range = self.visible_range();
        let dropdown_height = if matches.is_empty() {
            0
        } else {
            u16::try_from(visible_range.len()).unwrap_or(0) + 2 // +2 for borders
        };

        let chunks = Layout::default()
            .constraints([
                Constraint::Min(0),
                Constraint::Length(dropdown_height),
                Constraint::Length(1),
            ])
            .split(area);

        let dropdown_area = chunks[1];
        let input_area = chunks[2];

        if !matches.is_empty() {
            let rows: Vec<Line> = matches[visible_range.clone()]
                .iter()
                .enumerate()
                .map(|(row_index, candidate)| {
                    let is_selected =
                        visible_range.start + row_index == self.picker.selected_index();
                    let prefix = if is_selected { ">> " } else { "   " };
                    let suffix = if candidate.is_dir { "/" } else { "" };
                    let style = if is_selected {
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD)
                    } else if candidate.is_dir {
                        Style::default().fg(Color::Yellow)
                    } else {
                        Style::default().fg(Color::DarkGray)
                    };

                    Line::from(Span::styled(
                        format!(
                            "{prefix}{} {}{suffix}",
                            Icon::for_entry(candidate.is_dir),
                            candidate.name
                        ),
                        style,
                    ))
                })
                .collect();

            let dropdown = Paragraph::new(rows).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            );
            f.render_widget(Clear, dropdown_area);
            f.render_widget(dropdown, dropdown_area);
        }

        let input_line = Line::from(vec![
            Span::styled(INPUT_PREFIX, Style::default().fg(Color::Cyan)),
            Span::raw(self.picker.input()),
        ]);
        let input_widget = Paragraph::new(input_line);
        f.render_widget(Clear, input_area);
        f.render_widget(input_widget, input_area);

        let cursor_x = input_area
            .x
            .saturating_add(u16::try_from(INPUT_PREFIX.width()).unwrap_or(0))
            .saturating_add(u16::try_from(self.picker.input().width()).unwrap_or(0));
        f.set_cursor_position((cursor_x, input_area.y));
    }
}
