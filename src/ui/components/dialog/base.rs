//! Base dialog component

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph},
    Frame,
};

/// Inner padding, 2 chars on each side
const PADDING: u16 = 4;

/// Configuration for rendering a dialog
pub struct DialogConfig<'a> {
    /// Dialog title
    pub title: &'a str,
    /// Title color
    pub title_color: Color,
    /// Border color
    pub border_color: Color,
    /// Body lines, already laid out
    pub body: Vec<Line<'a>>,
    /// Hint text shown at the bottom (e.g., "Press Enter to dismiss")
    pub hint: Option<Vec<Span<'a>>>,
    /// Maximum width of the dialog
    pub max_width: u16,
}

impl<'a> Default for DialogConfig<'a> {
    fn default() -> Self {
        Self {
            title: "Dialog",
            title_color: Color::White,
            border_color: Color::White,
            body: Vec::new(),
            hint: None,
            max_width: 60,
        }
    }
}

impl<'a> DialogConfig<'a> {
    /// Widest line the body may use
    pub fn text_width(&self) -> usize {
        self.max_width.saturating_sub(PADDING + 2) as usize
    }
}

/// Rect of the given size centered in `area`, clamped to it
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Render a centered dialog overlay
pub fn render_dialog(frame: &mut Frame, config: DialogConfig) {
    let hint_width: usize = config.hint.iter().flatten().map(Span::width).sum();
    let body_width = config.body.iter().map(Line::width).max().unwrap_or(0);
    let content_width = body_width.max(config.title.len()).max(hint_width) as u16;

    // title + blank + body, then blank + hint when present
    let mut lines = Vec::with_capacity(config.body.len() + 4);
    lines.push(Line::from(Span::styled(
        config.title,
        Style::default()
            .fg(config.title_color)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::default());
    lines.extend(config.body);
    if let Some(hint) = config.hint {
        lines.push(Line::default());
        lines.push(Line::from(hint));
    }

    let dialog_area = centered(
        frame.area(),
        (content_width + PADDING + 2).min(config.max_width),
        (lines.len() as u16 + 2).max(5),
    );
    let background = Style::default().bg(Color::Black);

    frame.render_widget(Clear, dialog_area);
    frame.render_widget(
        Paragraph::new(lines).style(background).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(config.border_color))
                .padding(Padding::horizontal(PADDING / 2 - 1))
                .style(background),
        ),
        dialog_area,
    );
}

/// Wrap text to fit within a maximum width
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        if paragraph.is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current_line = String::new();
        for word in paragraph.split_whitespace() {
            let current_width = current_line.chars().count();
            if current_width + word.chars().count() + 1 > max_width && !current_line.is_empty() {
                lines.push(std::mem::take(&mut current_line));
            }
            if !current_line.is_empty() {
                current_line.push(' ');
            }
            current_line.push_str(word);
        }
        if !current_line.is_empty() {
            lines.push(current_line);
        }
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

/// Style for a key name inside a hint line
pub fn key_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}
