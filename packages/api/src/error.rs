use thiserror::Error;

/// Failure of one API call, normalized at the client boundary.
///
/// `Server` carries the backend's human-readable message verbatim, so action
/// handlers can surface it unchanged. Transport and body-decoding failures
/// collapse into `Transport`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Server(String),
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),
}
