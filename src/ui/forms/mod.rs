//! Form rendering module
//!
//! - `field_renderer`: one bordered field with placeholder and error
//! - `registration_form`: the event page's registration panel

mod field_renderer;
mod registration_form;

pub use registration_form::draw_registration_form;
