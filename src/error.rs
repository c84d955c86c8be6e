use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClockifyError {
    /// The API key cannot be sent as a header value.
    #[error("invalid API key: {0}")]
    InvalidApiKey(#[from] reqwest::header::InvalidHeaderValue),

    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// A request body that cannot be encoded as JSON.
    #[error("failed to encode request body: {0}")]
    Payload(#[source] serde_json::Error),

    /// A 2xx body that does not have the expected shape.
    #[error("invalid response: {0}")]
    InvalidResponse(#[from] serde_json::Error),
}
