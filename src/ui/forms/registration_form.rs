//! Registration form panel on the event page

use super::field_renderer::{draw_field, draw_help_text, FIELD_HEIGHT};
use crate::platform::SUBMIT_SHORTCUT;
use crate::state::{LoadedEvent, SubmissionPhase};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the form fields and the register button
pub fn draw_registration_form(frame: &mut Frame, area: Rect, loaded: &LoadedEvent) {
    let block = Block::default()
        .title(" Register Now ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let form = &loaded.form;
    if form.phase() == SubmissionPhase::Submitted {
        draw_submitted(frame, inner);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),                // Fields
            Constraint::Length(BUTTON_HEIGHT), // Register button
            Constraint::Length(1),             // Help
        ])
        .split(inner);

    let fields = &loaded.event.fields;
    for (row, area) in field_rows(chunks[0], fields.len(), form.active_field_index) {
        let definition = &fields[row];
        draw_field(
            frame,
            area,
            definition,
            form.value(&definition.id),
            form.error(&definition.id),
            row == form.active_field_index && form.is_editable(),
        );
    }

    let label = match form.phase() {
        SubmissionPhase::Submitting => "Submitting...",
        SubmissionPhase::AwaitingPayment => "Awaiting payment...",
        _ => "✓ Register",
    };
    render_button(
        frame,
        chunks[1],
        label,
        form.is_buttons_row_active(),
        form.is_editable(),
    );

    draw_help_text(
        frame,
        chunks[2],
        &format!("Tab:next  ←/→:choose  Enter/{SUBMIT_SHORTCUT}:register  ✓ Your information is secure"),
    );
}

/// Rows of the fields that fit in `area`, scrolled so the focused one is shown.
/// Every rect stays inside `area`.
fn field_rows(area: Rect, count: usize, focus: usize) -> Vec<(usize, Rect)> {
    let visible = (area.height / FIELD_HEIGHT).max(1) as usize;
    let focus = focus.min(count.saturating_sub(1));
    let first = (focus + 1).saturating_sub(visible);

    (first..count)
        .take(visible)
        .map(|row| {
            let rect = Rect {
                y: area.y + ((row - first) as u16) * FIELD_HEIGHT,
                height: FIELD_HEIGHT.min(area.height),
                ..area
            };
            (row, rect)
        })
        .collect()
}

fn draw_submitted(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "✓ Registration received",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Taking you to the confirmation page...",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(ratatui::layout::Alignment::Center)
            .wrap(Wrap { trim: true }),
        area,
    );
}
