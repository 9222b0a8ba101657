//! Layout components (header, status bar)

use crate::app::App;
use crate::platform::{COPY_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::{SubmissionPhase, View};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Split the screen into header, content and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Draw the app header with the current route
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let path = app.state.current_view.path(&app.state.view_params);
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            " Qvent ",
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(path, Style::default().fg(Color::DarkGray)),
    ]))
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(header, area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let phase = app.state.loaded_event().map(|loaded| loaded.form.phase());
    let mut spans = vec![Span::styled(
        format!(" {}", view_hints(&app.state.current_view, phase)),
        Style::default().fg(Color::Gray),
    )];

    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    // Quit hint on the right
    let quit_hint = " ^C:quit ";
    let quit_area = Rect {
        x: area.width.saturating_sub(quit_hint.len() as u16),
        y: area.height.saturating_sub(1),
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Keyboard hints for the current view and registration phase
fn view_hints(view: &View, phase: Option<SubmissionPhase>) -> String {
    match (view, phase) {
        (View::Event, None) => "Esc:back".to_string(),
        (View::Event, Some(SubmissionPhase::Editing)) => format!(
            "Tab/↑↓:field  ←/→:option  {SUBMIT_SHORTCUT}:register  F1-F3:sections  {COPY_SHORTCUT}:copy"
        ),
        (View::Event, Some(SubmissionPhase::AwaitingPayment)) => {
            "←/→:method  Enter:pay  Esc:cancel".to_string()
        }
        (View::Event, Some(SubmissionPhase::Submitting)) => "Submitting...".to_string(),
        (View::Event, Some(SubmissionPhase::Submitted)) => "Registered".to_string(),
        (View::NotFound, _) => "b:back  q:quit".to_string(),
        (View::Success | View::Expired, _) => "Enter/q:quit".to_string(),
    }
}
