//! Registration form domain layer
//!
//! Field behaviour, validation and the submission controller.

pub mod field;
mod form_state;
mod validation;

use std::collections::HashMap;

pub use form_state::{
    finalize_submission, Form, PaymentResolution, PaymentState, RegistrationForm,
    SubmissionOutcome, SubmissionPhase, SubmitOutcome,
};

/// Entered values keyed by field id
pub type FormValues = HashMap<String, String>;

/// Validation messages keyed by field id
pub type ValidationErrors = HashMap<String, String>;
