//! REST client for the public event API
//!
//! Talks to `{base}/public/event/{id}` and `{base}/public/event/{id}/submit`
//! and classifies failures into [`ApiError`].

use super::error::ApiError;
use super::traits::EventApi;
use crate::state::{EventDefinition, FormValues};
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::Deserialize;
use url::Url;

/// Error payload the backend sends alongside failures
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Client for the public event endpoints
#[derive(Debug, Clone)]
pub struct EventClient {
    http: Client,
    base_url: Url,
}

impl EventClient {
    /// Create a client for the given API base URL
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url =
            Url::parse(base_url).map_err(|e| anyhow!("Invalid API base URL {base_url}: {e}"))?;
        if base_url.cannot_be_a_base() {
            return Err(anyhow!("API base URL cannot be used as a base: {base_url}"));
        }
        Ok(Self {
            http: Client::new(),
            base_url,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build `{base}/public/event/{id}[/suffix]` with the id as one path segment
    fn event_url(&self, event_id: &str, suffix: Option<&str>) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend(["public", "event", event_id]);
            if let Some(suffix) = suffix {
                segments.push(suffix);
            }
        }
        url
    }

    /// Status code and server message of a non-success response
    async fn read_failure(response: Response) -> (u16, Option<String>) {
        let status = response.status().as_u16();
        let message = response
            .text()
            .await
            .ok()
            .and_then(|body| serde_json::from_str::<ErrorBody>(&body).ok())
            .and_then(|body| body.message);
        (status, message)
    }
}

#[async_trait]
impl EventApi for EventClient {
    async fn fetch_event(&self, event_id: &str) -> Result<EventDefinition, ApiError> {
        let url = self.event_url(event_id, None);
        tracing::debug!(%url, "fetching event");

        let response = self.http.get(url).send().await?;
        if !response.status().is_success() {
            let (status, message) = Self::read_failure(response).await;
            let err = ApiError::from_status(status, message);
            tracing::warn!(event_id, error = %err, "event fetch failed");
            return Err(err);
        }

        let body = response.bytes().await?;
        let event: EventDefinition = serde_json::from_slice(&body)?;
        tracing::info!(event_id, fields = event.fields.len(), "event loaded");
        Ok(event)
    }

    async fn submit_event(&self, event_id: &str, values: &FormValues) -> Result<(), ApiError> {
        let url = self.event_url(event_id, Some("submit"));
        tracing::debug!(%url, fields = values.len(), "submitting registration");

        let response = self.http.post(url).json(values).send().await?;
        if !response.status().is_success() {
            let (status, message) = Self::read_failure(response).await;
            let err = ApiError::from_submit_status(status, message);
            tracing::warn!(event_id, error = %err, "submission failed");
            return Err(err);
        }

        tracing::info!(event_id, "registration submitted");
        Ok(())
    }
}
