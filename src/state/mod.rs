//! Application state module

mod app_state;
pub mod countdown;
mod event;
pub mod forms;
pub mod markup;

pub use app_state::*;
pub use event::*;
pub use forms::{
    Form, FormValues, PaymentResolution, PaymentState, SubmissionOutcome, SubmissionPhase,
    SubmitOutcome,
};
