//! Lightweight markup used in event descriptions
//!
//! Supports `#`/`##`/`###` headings, `- ` list items, `**bold**` and `*italic*`.

/// Block-level kind of one markup line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Heading(u8),
    ListItem,
    Paragraph,
}

/// Inline emphasis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    None,
    Bold,
    Italic,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineSpan {
    pub text: String,
    pub emphasis: Emphasis,
}

impl InlineSpan {
    fn new(text: impl Into<String>, emphasis: Emphasis) -> Self {
        Self {
            text: text.into(),
            emphasis,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkupBlock {
    pub kind: BlockKind,
    pub spans: Vec<InlineSpan>,
}

/// Transform description text into blocks, one per non-blank line
pub fn parse(text: &str) -> Vec<MarkupBlock> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(parse_line)
        .collect()
}

fn parse_line(line: &str) -> MarkupBlock {
    let (kind, body) = if let Some(rest) = line.strip_prefix("### ") {
        (BlockKind::Heading(3), rest)
    } else if let Some(rest) = line.strip_prefix("## ") {
        (BlockKind::Heading(2), rest)
    } else if let Some(rest) = line.strip_prefix("# ") {
        (BlockKind::Heading(1), rest)
    } else if let Some(rest) = line.strip_prefix("- ") {
        (BlockKind::ListItem, rest)
    } else {
        (BlockKind::Paragraph, line.trim())
    };

    MarkupBlock {
        kind,
        spans: parse_inline(body),
    }
}

/// Split a line into plain, bold and italic spans
fn parse_inline(text: &str) -> Vec<InlineSpan> {
    let mut spans = Vec::new();
    let mut plain = String::new();
    let mut rest = text;

    while let Some(c) = rest.chars().next() {
        if let Some((inner, after)) = delimited(rest, "**") {
            flush(&mut spans, &mut plain);
            spans.push(InlineSpan::new(inner, Emphasis::Bold));
            rest = after;
        } else if let Some((inner, after)) = delimited(rest, "*") {
            flush(&mut spans, &mut plain);
            spans.push(InlineSpan::new(inner, Emphasis::Italic));
            rest = after;
        } else {
            plain.push(c);
            rest = &rest[c.len_utf8()..];
        }
    }
    flush(&mut spans, &mut plain);
    spans
}

/// Match `<delim>inner<delim>` at the start of `text` with a non-empty inner part
fn delimited<'a>(text: &'a str, delim: &str) -> Option<(&'a str, &'a str)> {
    let body = text.strip_prefix(delim)?;
    let end = body.find(delim)?;
    if end == 0 {
        return None;
    }
    Some((&body[..end], &body[end + delim.len()..]))
}

fn flush(spans: &mut Vec<InlineSpan>, plain: &mut String) {
    if !plain.is_empty() {
        spans.push(InlineSpan::new(std::mem::take(plain), Emphasis::None));
    }
}
