//! Field rendering utilities for forms

use crate::state::forms::field;
use crate::state::FieldDefinition;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows taken by one field (border + value + border carrying the error)
pub const FIELD_HEIGHT: u16 = 3;

/// Draw one registration field.
///
/// Empty values show the field's placeholder. A validation error turns the
/// border red and is printed on the bottom border.
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    definition: &FieldDefinition,
    value: &str,
    error: Option<&str>,
    is_active: bool,
) {
    let behavior = field::behavior(definition.kind);

    let border_style = if error.is_some() {
        Style::default().fg(Color::Red)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let value_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let mut spans = Vec::new();
    if behavior.is_choice && is_active {
        spans.push(Span::styled("◂ ", Style::default().fg(Color::Cyan)));
    }
    if value.is_empty() {
        spans.push(Span::styled(
            field::placeholder(definition),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ));
    } else {
        spans.push(Span::styled(value, value_style));
    }
    if behavior.is_choice {
        if is_active {
            spans.push(Span::styled(" ▸", Style::default().fg(Color::Cyan)));
        }
    } else if is_active {
        spans.push(Span::styled("▌", Style::default().fg(Color::Cyan)));
    }

    let mut title = vec![Span::raw(format!(" {}", definition.label))];
    if definition.required {
        title.push(Span::styled(" *", Style::default().fg(Color::Red)));
    }
    title.push(Span::styled(
        format!(" ({}) ", behavior.tag),
        Style::default().fg(Color::DarkGray),
    ));

    let mut block = Block::default()
        .title(Line::from(title))
        .borders(Borders::ALL)
        .border_style(border_style);
    if let Some(error) = error {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" ⚠ {error} "),
            Style::default().fg(Color::Red),
        )));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

/// Draw help text at the bottom of a form
pub fn draw_help_text(frame: &mut Frame, area: Rect, text: &str) {
    let help = Paragraph::new(text).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, area);
}
