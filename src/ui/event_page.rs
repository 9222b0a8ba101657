//! Event page: header, countdown, detail sections and the registration form

use super::forms::draw_registration_form;
use super::markup;
use crate::app::App;
use crate::platform::COPY_SHORTCUT;
use crate::state::{Category, DetailSection, EventLoad, LoadedEvent, LocationType};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the event page for its current load state
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let Some(page) = app.state.event_page.as_ref() else {
        return;
    };

    match &page.load {
        EventLoad::Loading => draw_message(
            frame,
            area,
            vec![Line::from(Span::styled(
                "Loading event...",
                Style::default().fg(Color::DarkGray),
            ))],
        ),
        EventLoad::Failed(message) => draw_message(
            frame,
            area,
            vec![
                Line::from(Span::styled(
                    message.as_str(),
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from(vec![
                    Span::styled("Enter", Style::default().fg(Color::Cyan)),
                    Span::raw(" Go Back"),
                ]),
            ],
        ),
        EventLoad::Ready(loaded) => draw_loaded(frame, area, loaded),
    }
}

fn draw_message(frame: &mut Frame, area: Rect, lines: Vec<Line>) {
    let top = area.height.saturating_sub(lines.len() as u16) / 2;
    let area = Rect {
        y: area.y + top,
        height: area.height.saturating_sub(top),
        ..area
    };
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn draw_loaded(frame: &mut Frame, area: Rect, loaded: &LoadedEvent) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Name + badges
            Constraint::Min(0),    // Body
        ])
        .split(area);

    draw_title(frame, chunks[0], loaded);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(chunks[1]);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Countdown
            Constraint::Min(0),    // Sections
        ])
        .split(columns[0]);

    draw_countdown(frame, left[0], loaded);
    draw_sections(frame, left[1], loaded);
    draw_registration_form(frame, columns[1], loaded);
}

fn draw_title(frame: &mut Frame, area: Rect, loaded: &LoadedEvent) {
    let event = &loaded.event;
    let badge_style = match event.category {
        Category::Free => Style::default().fg(Color::Black).bg(Color::Green),
        Category::Paid => Style::default().fg(Color::White).bg(Color::Magenta),
    };

    let lines = vec![
        Line::from(Span::styled(
            event.name.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(
                format!(" {} ", event.price_label()),
                badge_style.add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  📅 {}", event.expiry_date.format("%b %-d")),
                Style::default().fg(Color::Gray),
            ),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn draw_countdown(frame: &mut Frame, area: Rect, loaded: &LoadedEvent) {
    let block = Block::default()
        .title(" EVENT STARTS IN ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let countdown = loaded.countdown.current();
    if countdown.expired {
        frame.render_widget(
            Paragraph::new(Span::styled(
                "Event Expired",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center),
            inner,
        );
        return;
    }

    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(inner);
    for (cell, (label, value)) in cells.iter().zip(countdown.units()) {
        let lines = vec![
            Line::from(Span::styled(
                format!("{value:02}"),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(label, Style::default().fg(Color::DarkGray))),
        ];
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), *cell);
    }
}

fn draw_sections(frame: &mut Frame, area: Rect, loaded: &LoadedEvent) {
    let event = &loaded.event;
    let mut lines: Vec<Line> = Vec::new();

    if !event.description.trim().is_empty() {
        section_header(&mut lines, loaded, DetailSection::About, "About", "F1");
        if loaded.sections.about {
            lines.extend(markup::to_lines(&event.description));
        }
        lines.push(Line::from(""));
    }

    section_header(&mut lines, loaded, DetailSection::Contact, "Contact", "F2");
    if loaded.sections.contact {
        lines.push(Line::from(vec![
            Span::styled(event.contact_name.as_str(), Style::default().fg(Color::Gray)),
            Span::raw("  "),
            Span::styled(
                event.contact_phone.as_str(),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(hint_line(COPY_SHORTCUT, "copy phone"));
    }
    lines.push(Line::from(""));

    if let Some(location) = event.location() {
        section_header(&mut lines, loaded, DetailSection::Location, "Location", "F3");
        if loaded.sections.location {
            match event.location_type {
                LocationType::Url => {
                    lines.push(Line::from(Span::styled(
                        "View Maps →",
                        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                    )));
                    lines.push(Line::from(Span::styled(
                        location,
                        Style::default()
                            .fg(Color::Blue)
                            .add_modifier(Modifier::UNDERLINED),
                    )));
                    if !loaded.sections.contact {
                        lines.push(hint_line(COPY_SHORTCUT, "copy link"));
                    }
                }
                LocationType::Address => lines.push(Line::from(location)),
            }
        }
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

fn section_header(
    lines: &mut Vec<Line>,
    loaded: &LoadedEvent,
    section: DetailSection,
    title: &'static str,
    key: &'static str,
) {
    let marker = if loaded.sections.is_expanded(section) {
        "▾ "
    } else {
        "▸ "
    };
    lines.push(Line::from(vec![
        Span::styled(marker, Style::default().fg(Color::Cyan)),
        Span::styled(title, Style::default().add_modifier(Modifier::BOLD)),
        Span::styled(format!("  {key}"), Style::default().fg(Color::DarkGray)),
    ]));
}

fn hint_line(key: &'static str, action: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(key, Style::default().fg(Color::DarkGray)),
        Span::styled(format!(" {action}"), Style::default().fg(Color::DarkGray)),
    ])
}
