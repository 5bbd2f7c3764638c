/// Error types shared by the API client and the dashboard page.
use serde_json::Value;
use thiserror::Error;

/// Errors raised while talking to the deployment backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response
    #[error("Request failed: {0}")]
    Network(String),

    /// The response body was not the JSON we expected
    #[error("Failed to parse response: {0}")]
    Decode(String),

    /// The backend refused the request and explained why in the body
    #[error("Request rejected with status {status}")]
    Rejected {
        status: u16,
        body: Value,
    },

    /// A non-2xx answer whose body is not JSON, such as a proxy error page
    #[error("Unexpected status {status}: {body}")]
    UnexpectedStatus {
        status: u16,
        body: String,
    },
}

/// Errors surfaced by the dashboard page handlers.
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error(transparent)]
    Api(#[from] ApiError),

    /// A rejected submission whose body is not a field -> messages map
    #[error("Unexpected validation payload: {0}")]
    MalformedValidationPayload(String),
}
