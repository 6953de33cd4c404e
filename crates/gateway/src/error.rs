//! Gateway error taxonomy.

use stocklens_core::DomainError;
use thiserror::Error;

/// Everything that can go wrong talking to the remote inventory API.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The request never produced a usable HTTP response.
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a non-success status and (usually) a
    /// `{"message": ...}` body.
    #[error("api error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The API rejected the bearer token. The stored session has already
    /// been cleared by the time this is returned.
    #[error("session expired")]
    SessionExpired,

    /// Client-side validation rejected the payload before any request was
    /// sent.
    #[error(transparent)]
    Invalid(#[from] DomainError),
}

impl GatewayError {
    /// One-line text suitable for surfacing directly in the UI.
    pub fn user_message(&self) -> String {
        match self {
            GatewayError::Transport(_) => {
                "Could not reach the inventory service. Check your connection.".to_string()
            }
            GatewayError::Api { message, .. } => message.clone(),
            GatewayError::SessionExpired => "Your session has expired. Sign in again.".to_string(),
            GatewayError::Invalid(err) => err.to_string(),
        }
    }
}

pub type GatewayResult<T> = Result<T, GatewayError>;
