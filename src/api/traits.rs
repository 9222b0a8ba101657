//! Trait abstraction for the event API to enable mocking in tests

use super::error::ApiError;
use crate::state::{EventDefinition, FormValues};
use async_trait::async_trait;

/// Operations the registration page needs from the backend
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EventApi: Send + Sync {
    /// `GET {base}/public/event/{id}`
    async fn fetch_event(&self, event_id: &str) -> Result<EventDefinition, ApiError>;

    /// `POST {base}/public/event/{id}/submit` with the values map as body
    async fn submit_event(&self, event_id: &str, values: &FormValues) -> Result<(), ApiError>;
}
