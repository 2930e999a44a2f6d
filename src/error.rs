use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can be returned while fetching jokes.
///
/// None of these are retried by the client.
#[derive(Debug, Error)]
pub enum Error {
    /// An argument was rejected before any request was made.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The request could not be built, usually because of a malformed URL.
    #[error("failed to create request: {0}")]
    Request(#[source] reqwest::Error),

    /// The request could not be sent or its body could not be read.
    #[error("failed to fetch joke: {0}")]
    Transport(#[source] reqwest::Error),

    /// The provider answered with a non-2xx status.
    #[error("provider returned status code: {0}")]
    UnexpectedStatus(StatusCode),

    /// The response body was not the expected JSON.
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}
