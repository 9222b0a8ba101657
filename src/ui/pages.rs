//! Static pages: success, not found and expired

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

/// Shared look of a centered message card
struct PageCard<'a> {
    icon: &'a str,
    title: &'a str,
    accent: Color,
    lines: &'a [&'a str],
    badge: Option<&'a str>,
}

fn draw_card(frame: &mut Frame, area: Rect, card: PageCard) {
    let mut content = vec![
        Line::from(Span::styled(
            card.icon,
            Style::default().fg(card.accent).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            card.title,
            Style::default().fg(card.accent).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    content.extend(
        card.lines
            .iter()
            .map(|line| Line::from(Span::styled(*line, Style::default().fg(Color::Gray)))),
    );
    if let Some(badge) = card.badge {
        content.push(Line::from(""));
        content.push(Line::from(Span::styled(
            badge,
            Style::default().fg(Color::Black).bg(card.accent),
        )));
    }

    let width = area.width.min(72);
    let height = (content.len() as u16 + 2).min(area.height);
    let card_area = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    };

    let paragraph = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(card.accent)),
        );
    frame.render_widget(paragraph, card_area);
}

/// Draw the submission confirmation
pub fn draw_success(frame: &mut Frame, area: Rect) {
    draw_card(
        frame,
        area,
        PageCard {
            icon: "✓",
            title: "Submitted Successfully!",
            accent: Color::Green,
            lines: &[
                "Thank you for your submission",
                "Your form has been received and recorded.",
                "You will receive a confirmation email shortly",
            ],
            badge: Some(" ✓ Your submission has been confirmed "),
        },
    );
}

/// Draw the 404 page
pub fn draw_not_found(frame: &mut Frame, area: Rect) {
    draw_card(
        frame,
        area,
        PageCard {
            icon: "404",
            title: "Page Not Found",
            accent: Color::Red,
            lines: &["The page you're looking for doesn't exist or has been removed."],
            badge: None,
        },
    );
}

/// Draw the expired-event page
pub fn draw_expired(frame: &mut Frame, area: Rect) {
    draw_card(
        frame,
        area,
        PageCard {
            icon: "⌛",
            title: "Event Expired",
            accent: Color::Yellow,
            lines: &["Registration for this event has closed."],
            badge: None,
        },
    );
}
