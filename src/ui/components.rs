//! UI Components for the terminal form

use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use ratatui::Frame;

use super::{Focus, FormState};
use crate::parser::ParsedRecord;
use crate::reference::UNKNOWN_DESCRIPTION;

/// UWP input field with its validation message underneath
pub struct InputPanel<'a> {
    state: &'a FormState,
}

impl<'a> InputPanel<'a> {
    pub fn new(state: &'a FormState) -> Self {
        Self { state }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let focused = self.state.focus() == Focus::Input;
        let border_style = match (self.state.error(), focused) {
            (Some(_), _) => Style::default().fg(Color::Red),
            (None, true) => Style::default().fg(Color::Cyan),
            (None, false) => Style::default().fg(Color::Blue),
        };

        let field_area = Rect {
            height: area.height.min(3),
            ..area
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" UWP ")
            .border_style(border_style);
        let field = Paragraph::new(self.state.input()).block(block);
        frame.render_widget(field, field_area);

        if focused {
            let cursor_x = field_area.x + 1 + self.state.input().chars().count() as u16;
            let max_x = field_area.right().saturating_sub(2);
            frame.set_cursor_position((cursor_x.min(max_x), field_area.y + 1));
        }

        if let Some(error) = self.state.error() {
            if area.height > field_area.height {
                let error_area = Rect {
                    y: field_area.bottom(),
                    height: 1,
                    ..area
                };
                let message = Paragraph::new(Line::from(Span::styled(
                    format!(" {}", error),
                    Style::default().fg(Color::Red),
                )));
                frame.render_widget(message, error_area);
            }
        }
    }
}

/// Parse button, dimmed while submission is disabled
pub struct SubmitButton<'a> {
    state: &'a FormState,
}

impl<'a> SubmitButton<'a> {
    pub fn new(state: &'a FormState) -> Self {
        Self { state }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let mut style = if self.state.can_submit() {
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        if self.state.focus() == Focus::Submit {
            style = style.add_modifier(Modifier::REVERSED);
        }

        let button = Paragraph::new(Line::from(vec![
            Span::raw(" "),
            Span::styled("[ Parse UWP ]", style),
        ]));
        frame.render_widget(button, area);
    }
}

/// Parameter / code / description table for a parsed record
pub struct ResultsPanel<'a> {
    record: Option<&'a ParsedRecord>,
}

impl<'a> ResultsPanel<'a> {
    pub fn new(record: Option<&'a ParsedRecord>) -> Self {
        Self { record }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Parsed UWP ")
            .border_style(Style::default().fg(Color::Blue));

        let Some(record) = self.record else {
            frame.render_widget(Paragraph::new("").block(block), area);
            return;
        };

        let header = Row::new(["Parameter", "Code", "Description"]).style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );

        let rows: Vec<Row> = record
            .rows()
            .into_iter()
            .map(|row| {
                let description_style = if row.description == UNKNOWN_DESCRIPTION {
                    Style::default().fg(Color::Yellow)
                } else {
                    Style::default()
                };
                Row::new(vec![
                    Cell::from(row.field.label()),
                    Cell::from(row.code),
                    Cell::from(Span::styled(row.description, description_style)),
                ])
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Length(14),
                Constraint::Length(6),
                Constraint::Min(10),
            ],
        )
        .header(header)
        .block(block);

        frame.render_widget(table, area);
    }
}

/// One-line key reference
pub struct HelpBar;

impl HelpBar {
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let key = Style::default().fg(Color::Cyan);
        let text = Style::default().fg(Color::DarkGray);
        let line = Line::from(vec![
            Span::styled(" Tab", key),
            Span::styled(" switch focus  ", text),
            Span::styled("Enter", key),
            Span::styled(" parse  ", text),
            Span::styled("Ctrl+U", key),
            Span::styled(" clear  ", text),
            Span::styled("Esc", key),
            Span::styled(" quit", text),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }
}
