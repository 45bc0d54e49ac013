use thiserror::Error;

/// Error taxonomy shared by every cell. Validation errors are caught
/// before any network call; transport errors are retryable; rejections
/// carry the server message verbatim when one was present.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Protocol error: {0}")]
    Protocol(String),

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Rejected: {0}")]
    Rejected(String),

    #[error("A reservation request is already in flight")]
    SubmissionInFlight,
}

impl AppError {
    /// Transport and protocol failures leave the triggering action
    /// available for retry; everything else needs user input first.
    pub fn is_retryable(&self) -> bool {
        matches!(self, AppError::Transport(_) | AppError::Protocol(_))
    }
}
