use reqwest::StatusCode;
use thiserror::Error;

/// Failure talking to the backend. Transport failures and non-success
/// statuses are surfaced the same way to callers; the status code is
/// kept only for diagnostics.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Backend returned status {0}")]
    Status(StatusCode),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => ApiError::Status(status),
            None => ApiError::Transport(err.to_string()),
        }
    }
}
