//! Payment dialog for paid registrations

use super::base::{key_style, render_dialog, DialogConfig};
use crate::payment::PaymentMethod;
use crate::state::{format_amount, PaymentState};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    Frame,
};

/// Render the payment step: amount due, method choice and the pay action
pub fn render_payment_dialog(frame: &mut Frame, payment: &PaymentState) {
    let mut body = vec![
        Line::from(Span::styled(
            "Amount Due",
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            format_amount(payment.amount),
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Select Payment Method"),
    ];
    body.extend(PaymentMethod::ALL.iter().map(|method| method_line(*method, payment)));
    body.push(Line::from(""));

    let hint = if payment.processing {
        body.push(Line::from(Span::styled(
            "Processing...",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
        vec![Span::styled(
            "Your payment information is secure",
            Style::default().fg(Color::DarkGray),
        )]
    } else {
        vec![
            Span::styled("←/→", key_style()),
            Span::raw(" method  "),
            Span::styled("Enter", key_style()),
            Span::raw(" Pay Now  "),
            Span::styled("Esc", key_style()),
            Span::raw(" Cancel"),
        ]
    };

    render_dialog(
        frame,
        DialogConfig {
            title: "Complete Payment",
            title_color: Color::Magenta,
            border_color: Color::Magenta,
            body,
            hint: Some(hint),
            max_width: 56,
        },
    );
}

fn method_line(method: PaymentMethod, payment: &PaymentState) -> Line<'static> {
    let selected = method == payment.method;
    let (marker, style) = if selected {
        (
            "● ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        ("○ ", Style::default())
    };

    Line::from(vec![
        Span::styled(marker, style),
        Span::styled(method.label(), style),
        Span::styled(
            format!("  {}", method.detail()),
            Style::default().fg(Color::DarkGray),
        ),
    ])
}
