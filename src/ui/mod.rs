//! UI module for rendering the TUI

mod components;
mod event_page;
mod forms;
mod layout;
mod markup;
mod pages;

use crate::app::App;
use crate::state::{SubmissionPhase, View};
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (header_area, main_area) = layout::create_layout(frame.area());

    layout::draw_header(frame, header_area, app);

    // Draw main content based on current view
    match &app.state.current_view {
        View::Event => event_page::draw(frame, main_area, app),
        View::Success => pages::draw_success(frame, main_area),
        View::Expired => pages::draw_expired(frame, main_area),
        View::NotFound => pages::draw_not_found(frame, main_area),
    }

    // Draw status bar
    layout::draw_status_bar(frame, app);

    // Payment step sits above the page
    if let Some(loaded) = app.state.loaded_event() {
        if loaded.form.phase() == SubmissionPhase::AwaitingPayment {
            if let Some(payment) = loaded.form.payment() {
                components::render_payment_dialog(frame, payment);
            }
        }
    }

    // Alerts sit above everything else
    if let Some(error) = app.state.current_error() {
        components::render_error_dialog(frame, error);
    }
}
