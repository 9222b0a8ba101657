//! Per-kind field behaviour
//!
//! Each [`FieldKind`] maps to one row of a static table describing how the
//! field renders and which keystrokes it accepts.

use crate::state::{FieldDefinition, FieldKind};

/// Render and input behaviour of one field kind
#[derive(Debug)]
pub struct FieldBehavior {
    pub kind: FieldKind,
    /// Short tag shown next to the label
    pub tag: &'static str,
    /// Whether a typed character is accepted into the value
    pub accepts: fn(char) -> bool,
    /// Dropdowns cycle through options instead of taking text
    pub is_choice: bool,
}

fn any_printable(c: char) -> bool {
    !c.is_control()
}

fn no_whitespace(c: char) -> bool {
    !c.is_control() && !c.is_whitespace()
}

fn phone_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '+' | '-' | ' ' | '(' | ')')
}

fn number_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | '-')
}

fn date_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '-' | '/')
}

fn none(_: char) -> bool {
    false
}

static FIELD_BEHAVIORS: [FieldBehavior; 6] = [
    FieldBehavior {
        kind: FieldKind::Text,
        tag: "text",
        accepts: any_printable,
        is_choice: false,
    },
    FieldBehavior {
        kind: FieldKind::Email,
        tag: "email",
        accepts: no_whitespace,
        is_choice: false,
    },
    FieldBehavior {
        kind: FieldKind::Tel,
        tag: "tel",
        accepts: phone_char,
        is_choice: false,
    },
    FieldBehavior {
        kind: FieldKind::Number,
        tag: "number",
        accepts: number_char,
        is_choice: false,
    },
    FieldBehavior {
        kind: FieldKind::Date,
        tag: "YYYY-MM-DD",
        accepts: date_char,
        is_choice: false,
    },
    FieldBehavior {
        kind: FieldKind::Dropdown,
        tag: "select",
        accepts: none,
        is_choice: true,
    },
];

/// Look up the behaviour of a field kind
pub fn behavior(kind: FieldKind) -> &'static FieldBehavior {
    FIELD_BEHAVIORS
        .iter()
        .find(|b| b.kind == kind)
        .unwrap_or(&FIELD_BEHAVIORS[0])
}

/// Value after typing `c`, or None when the kind rejects the character
pub fn push_char(field: &FieldDefinition, current: &str, c: char) -> Option<String> {
    let behavior = behavior(field.kind);
    if behavior.is_choice || !(behavior.accepts)(c) {
        return None;
    }
    let mut value = current.to_string();
    value.push(c);
    Some(value)
}

/// Value after a backspace, or None when there is nothing to remove
pub fn pop_char(field: &FieldDefinition, current: &str) -> Option<String> {
    if current.is_empty() {
        return None;
    }
    if behavior(field.kind).is_choice {
        return Some(String::new());
    }
    let mut value = current.to_string();
    value.pop();
    Some(value)
}

/// Next (or previous) dropdown option after `current`, wrapping around
pub fn cycle_option(field: &FieldDefinition, current: &str, forward: bool) -> Option<String> {
    if !behavior(field.kind).is_choice || field.options.is_empty() {
        return None;
    }
    let count = field.options.len();
    let next = match field.options.iter().position(|o| o == current) {
        Some(i) if forward => (i + 1) % count,
        Some(i) => (i + count - 1) % count,
        None if forward => 0,
        None => count - 1,
    };
    Some(field.options[next].clone())
}

/// Text shown in place of an empty value
pub fn placeholder(field: &FieldDefinition) -> String {
    if behavior(field.kind).is_choice {
        format!("Select {}", field.label)
    } else {
        format!("{}...", field.label)
    }
}
