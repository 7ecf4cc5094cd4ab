use reqwest::StatusCode;
use thiserror::Error;

/// Failures at the HTTP boundary.
///
/// Callers never distinguish "could not reach the server" from "the server
/// said no". Both are terminal for the attempt and surface as one message.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server rejected the request ({status})")]
    Rejected {
        status: StatusCode,
        message: Option<String>,
    },
}

impl ApiError {
    /// The user-facing string: the server's own `message` when it sent one,
    /// otherwise a generic rendering.
    pub fn message(&self) -> String {
        match self {
            ApiError::Rejected {
                message: Some(message),
                ..
            } => message.clone(),
            other => other.to_string(),
        }
    }
}
