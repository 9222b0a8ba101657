//! Error taxonomy for the public event API

use thiserror::Error;

/// Failure of a call against the event API
#[derive(Debug, Error)]
pub enum ApiError {
    /// 404 on fetch
    #[error("event not found")]
    NotFound,

    /// 403 or 410: the event no longer accepts registrations
    #[error("event is closed or expired (HTTP {status})")]
    Closed { status: u16 },

    /// 409 on submit: this visitor already registered
    #[error("form already submitted")]
    Conflict,

    /// Any other non-success status, with the server message when one was sent
    #[error("request failed with HTTP {status}")]
    Status {
        status: u16,
        message: Option<String>,
    },

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// Classify a non-success HTTP status
    pub fn from_status(status: u16, message: Option<String>) -> Self {
        match status {
            404 => Self::NotFound,
            403 | 410 => Self::Closed { status },
            409 => Self::Conflict,
            _ => Self::Status { status, message },
        }
    }

    /// Classify a failed submission. A missing event is not special here,
    /// so 404 keeps its server message like any other status.
    pub fn from_submit_status(status: u16, message: Option<String>) -> Self {
        match status {
            404 => Self::Status { status, message },
            _ => Self::from_status(status, message),
        }
    }

    /// Message shown when a submission fails
    pub fn submission_message(&self) -> String {
        match self {
            Self::Conflict => "You have already submitted this form".to_string(),
            Self::Closed { .. } => "This event is closed".to_string(),
            Self::Status {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => message.clone(),
            _ => "Submission failed".to_string(),
        }
    }
}

/// What the event page does with the result of the initial fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchFailure {
    /// Leave for the not-found view without rendering anything inline
    NotFound,
    /// Halt with an inline message
    Inline(String),
}

impl From<&ApiError> for FetchFailure {
    fn from(err: &ApiError) -> Self {
        match err {
            ApiError::NotFound => Self::NotFound,
            ApiError::Closed { .. } => Self::Inline("This event is closed or expired".to_string()),
            _ => Self::Inline("Something went wrong".to_string()),
        }
    }
}
