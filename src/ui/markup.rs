//! Render parsed description markup as styled lines

use crate::state::markup::{self, BlockKind, Emphasis, InlineSpan};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Convert description text to lines for a paragraph widget
pub fn to_lines(text: &str) -> Vec<Line<'static>> {
    markup::parse(text)
        .into_iter()
        .map(|block| {
            let base = match block.kind {
                BlockKind::Heading(1) => Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
                BlockKind::Heading(_) => Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
                BlockKind::ListItem | BlockKind::Paragraph => Style::default(),
            };

            let mut spans = Vec::with_capacity(block.spans.len() + 1);
            if block.kind == BlockKind::ListItem {
                spans.push(Span::styled("• ", Style::default().fg(Color::Cyan)));
            }
            spans.extend(block.spans.into_iter().map(|span| styled(span, base)));
            Line::from(spans)
        })
        .collect()
}

fn styled(span: InlineSpan, base: Style) -> Span<'static> {
    let style = match span.emphasis {
        Emphasis::None => base,
        Emphasis::Bold => base.add_modifier(Modifier::BOLD),
        Emphasis::Italic => base.add_modifier(Modifier::ITALIC),
    };
    Span::styled(span.text, style)
}
