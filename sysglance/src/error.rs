//! Fetch failure kinds. Every variant collapses to one user-facing message.

use thiserror::Error;

/// The only text shown to the user when a fetch fails.
pub const FETCH_ERROR_MESSAGE: &str = "Error fetching system info. Please try again.";

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("endpoint answered HTTP {0}")]
    Status(u16),
    #[error("malformed system info body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("invalid endpoint '{0}': expected an http:// or https:// URL")]
    InvalidEndpoint(String),
}

impl FetchError {
    pub fn user_message(&self) -> &'static str {
        FETCH_ERROR_MESSAGE
    }
}
