//! Public event API client module

mod client;
mod error;
mod traits;

pub use client::EventClient;
pub use error::{ApiError, FetchFailure};
pub use traits::EventApi;

#[cfg(test)]
pub use traits::MockEventApi;
