use thiserror::Error;

/// Failure of a single HTTP exchange.
///
/// Transport and decode failures carry status 500; non-2xx responses carry the
/// response status. Error bodies are never inspected.
#[derive(Error, Clone, Debug, PartialEq)]
#[error("{message} (status {status})")]
pub struct ApiError {
    pub status: u64,
    pub message: String,
}

impl ApiError {
    pub fn new(status: u64, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

/// Rejections raised while turning raw form input into a request.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum FormError {
    #[error("Marks must be a whole number")]
    InvalidMarks(String),
    #[error("Combined marks are out of range")]
    MarksOverflow,
}
