//! Errors of the REST client
//!
//! Every failure ends the current request cycle; the page shows a single
//! error panel and waits for the next user action.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Server answered with a status outside 200..=299
    #[error("Request failed with HTTP status {status}")]
    RequestFailed { status: u16 },

    /// Network-level failure (DNS, refused connection, CORS)
    #[error("Network error: {0}")]
    Transport(String),

    /// Body was not the JSON we expected
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Short text for the error panel
    pub fn user_message(&self) -> String {
        match self {
            ApiError::RequestFailed { status } => {
                format!("The server returned an error ({}). Please try again.", status)
            }
            ApiError::Transport(_) => "Could not reach the sales service.".to_string(),
            ApiError::Decode(_) => "The sales service sent an unexpected response.".to_string(),
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Map a transport-level status to `Ok` or `RequestFailed`
pub fn check_status(status: u16) -> ApiResult<()> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(ApiError::RequestFailed { status })
    }
}
