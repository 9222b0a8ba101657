//! Registration form controller
//!
//! Owns the entered values, validation errors and the submission lifecycle,
//! including the payment step for paid events.
//!
//! ```text
//! Editing --submit (valid, free)--> Submitting --ok--> Submitted
//! Editing --submit (valid, paid)--> AwaitingPayment
//! AwaitingPayment --cancel / declined--> Editing
//! AwaitingPayment --payment approved--> Submitting
//! Submitting --failure--> Editing
//! ```

use super::validation::validate;
use super::{FormValues, ValidationErrors};
use crate::api::{ApiError, EventApi};
use crate::payment::{PaymentMethod, PaymentOutcome};
use crate::state::EventDefinition;

/// Trait for keyboard focus movement across form rows
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// Where a registration is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionPhase {
    #[default]
    Editing,
    AwaitingPayment,
    Submitting,
    Submitted,
}

/// Payment dialog state while awaiting payment
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentState {
    pub amount: f64,
    pub method: PaymentMethod,
    pub processing: bool,
}

/// Result of [`RegistrationForm::submit`]
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Not in the editing phase; nothing happened
    Ignored,
    /// Validation failed; errors were stored
    Invalid { errors: usize },
    /// Paid event; the payment dialog is open
    AwaitingPayment { amount: f64 },
    /// Phase is now `Submitting`; send these values
    Ready(FormValues),
}

/// Result of feeding a payment outcome back into the form
#[derive(Debug, Clone, PartialEq)]
pub enum PaymentResolution {
    Ignored,
    /// Phase is now `Submitting`; send these values
    Proceed(FormValues),
    /// Payment was declined; back to editing
    Declined(String),
}

/// Result of a finished submission call
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionOutcome {
    Ignored,
    Submitted,
    /// User-facing message; values are kept for a retry
    Failed(String),
}

/// Form state for one visit of an event page
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    pub values: FormValues,
    pub errors: ValidationErrors,
    phase: SubmissionPhase,
    payment: Option<PaymentState>,
    field_ids: Vec<String>,
    pub active_field_index: usize,
}

impl RegistrationForm {
    pub fn new(event: &EventDefinition) -> Self {
        Self {
            field_ids: event.fields.iter().map(|f| f.id.clone()).collect(),
            ..Self::default()
        }
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    pub fn payment(&self) -> Option<&PaymentState> {
        self.payment.as_ref()
    }

    pub fn is_editable(&self) -> bool {
        self.phase == SubmissionPhase::Editing
    }

    pub fn value(&self, field_id: &str) -> &str {
        self.values.get(field_id).map(String::as_str).unwrap_or("")
    }

    pub fn error(&self, field_id: &str) -> Option<&str> {
        self.errors.get(field_id).map(String::as_str)
    }

    /// Id of the focused field, None when the register button row is focused
    pub fn active_field_id(&self) -> Option<&str> {
        self.field_ids.get(self.active_field_index).map(String::as_str)
    }

    /// True when the register button row is focused
    pub fn is_buttons_row_active(&self) -> bool {
        self.active_field_index >= self.field_ids.len()
    }

    /// Store an edited value and clear that field's error immediately.
    ///
    /// Edits are only accepted while editing.
    pub fn on_field_change(&mut self, field_id: &str, value: String) -> bool {
        if !self.is_editable() {
            return false;
        }
        self.values.insert(field_id.to_string(), value);
        self.errors.remove(field_id);
        true
    }

    /// Validate and either stop, open the payment step, or begin submitting
    pub fn submit(&mut self, event: &EventDefinition) -> SubmitOutcome {
        if !self.is_editable() {
            tracing::debug!(phase = ?self.phase, "submit ignored");
            return SubmitOutcome::Ignored;
        }

        self.errors = validate(event, &self.values);
        if !self.errors.is_empty() {
            tracing::debug!(errors = self.errors.len(), "validation failed");
            return SubmitOutcome::Invalid {
                errors: self.errors.len(),
            };
        }

        if event.is_paid() {
            let amount = event.amount_due();
            self.phase = SubmissionPhase::AwaitingPayment;
            self.payment = Some(PaymentState {
                amount,
                method: PaymentMethod::default(),
                processing: false,
            });
            return SubmitOutcome::AwaitingPayment { amount };
        }

        SubmitOutcome::Ready(self.begin_submission())
    }

    /// Pick a payment method while the dialog is open and idle
    pub fn select_payment_method(&mut self, method: PaymentMethod) -> bool {
        match self.payment.as_mut() {
            Some(payment) if !payment.processing => {
                payment.method = method;
                true
            }
            _ => false,
        }
    }

    /// Close the payment dialog and return to editing. Values are untouched.
    pub fn cancel_payment(&mut self) -> bool {
        let idle = self.payment.as_ref().is_some_and(|p| !p.processing);
        if self.phase != SubmissionPhase::AwaitingPayment || !idle {
            return false;
        }
        self.phase = SubmissionPhase::Editing;
        self.payment = None;
        true
    }

    /// Mark the payment as processing; returns what to charge
    pub fn confirm_payment(&mut self) -> Option<(f64, PaymentMethod)> {
        if self.phase != SubmissionPhase::AwaitingPayment {
            return None;
        }
        let payment = self.payment.as_mut()?;
        if payment.processing {
            return None;
        }
        payment.processing = true;
        Some((payment.amount, payment.method))
    }

    /// Apply the gateway's answer to a confirmed payment
    pub fn complete_payment(&mut self, outcome: PaymentOutcome) -> PaymentResolution {
        let processing = self.payment.as_ref().is_some_and(|p| p.processing);
        if self.phase != SubmissionPhase::AwaitingPayment || !processing {
            return PaymentResolution::Ignored;
        }
        self.payment = None;

        match outcome {
            PaymentOutcome::Approved => PaymentResolution::Proceed(self.begin_submission()),
            PaymentOutcome::Declined(reason) => {
                tracing::warn!(%reason, "payment declined");
                self.phase = SubmissionPhase::Editing;
                PaymentResolution::Declined(reason)
            }
        }
    }

    /// Enter `Submitting` and snapshot the values to send
    fn begin_submission(&mut self) -> FormValues {
        self.phase = SubmissionPhase::Submitting;
        self.values.clone()
    }

    /// Apply the result of the submit call
    pub fn finish_submission(&mut self, result: Result<(), ApiError>) -> SubmissionOutcome {
        if self.phase != SubmissionPhase::Submitting {
            return SubmissionOutcome::Ignored;
        }
        match result {
            Ok(()) => {
                self.phase = SubmissionPhase::Submitted;
                SubmissionOutcome::Submitted
            }
            Err(err) => {
                self.phase = SubmissionPhase::Editing;
                SubmissionOutcome::Failed(err.submission_message())
            }
        }
    }
}

/// Send the values snapshotted when a form entered `Submitting`.
///
/// The result is applied afterwards with [`RegistrationForm::finish_submission`],
/// so the network call never holds the form.
pub async fn finalize_submission(
    api: &dyn EventApi,
    event_id: &str,
    values: &FormValues,
) -> Result<(), ApiError> {
    tracing::info!(%event_id, fields = values.len(), "submitting registration");
    api.submit_event(event_id, values).await
}

impl Form for RegistrationForm {
    fn field_count(&self) -> usize {
        self.field_ids.len() + 1 // fields + register button
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(self.field_ids.len());
    }
}
