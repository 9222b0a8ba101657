//! Dialog components for TUI

mod base;
mod error_dialog;
mod payment_dialog;

pub use error_dialog::render_error_dialog;
pub use payment_dialog::render_payment_dialog;
