//! Error dialog component

use super::base::{key_style, render_dialog, wrap_text, DialogConfig};
use ratatui::{
    style::Color,
    text::{Line, Span},
    Frame,
};

/// Render a blocking alert centered on the screen
pub fn render_error_dialog(frame: &mut Frame, error_message: &str) {
    let hint = vec![
        Span::raw("Press "),
        Span::styled("Enter", key_style()),
        Span::raw(" or "),
        Span::styled("Esc", key_style()),
        Span::raw(" to dismiss"),
    ];

    let mut config = DialogConfig {
        title: "Error",
        title_color: Color::Red,
        border_color: Color::Red,
        hint: Some(hint),
        ..DialogConfig::default()
    };
    config.body = wrap_text(error_message, config.text_width())
        .into_iter()
        .map(Line::from)
        .collect();

    render_dialog(frame, config);
}
