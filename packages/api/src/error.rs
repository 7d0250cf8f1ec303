use thiserror::Error;

/// Everything a backend call can fail with.
///
/// Only [`ApiError::Unauthorized`] receives central handling (session
/// teardown and redirect to login); the other variants are surfaced at the
/// call site as inline notices and never retried.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server rejected the session credential (HTTP 401). By the time
    /// the caller sees this, the session store has already been cleared.
    #[error("session credential rejected by the server")]
    Unauthorized { message: Option<String> },

    /// Any other non-2xx response, with the backend's `message` body when
    /// one was provided.
    #[error("request failed with status {status}")]
    Api {
        status: u16,
        message: Option<String>,
    },

    /// The request never produced a response (DNS, connection, decode).
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }

    /// User-facing text for inline banners.
    pub fn message(&self) -> String {
        match self {
            Self::Unauthorized { message } => message
                .clone()
                .unwrap_or_else(|| "Your session has expired. Please log in again.".to_string()),
            Self::Api {
                message: Some(message),
                ..
            } => message.clone(),
            Self::Api { status, .. } => format!("Request failed ({status}). Please try again."),
            Self::Transport(_) => "Could not reach the server. Please try again.".to_string(),
        }
    }
}
