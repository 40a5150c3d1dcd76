use thiserror::Error;

pub type Result<T> = std::result::Result<T, PacerError>;

#[derive(Debug, Error)]
pub enum PacerError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Login failed: {0}")]
    LoginRejected(String),

    #[error("Logout failed: {0}")]
    LogoutRejected(String),
}

impl From<reqwest::Error> for PacerError {
    fn from(err: reqwest::Error) -> Self {
        PacerError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for PacerError {
    fn from(err: serde_json::Error) -> Self {
        PacerError::Parse(err.to_string())
    }
}
