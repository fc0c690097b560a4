use thiserror::Error;

/// Typed failure of a single submission
///
/// Carries owned strings rather than source errors so it can live in the
/// cloneable model and be compared in tests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("No video file provided")]
    MissingFile,

    #[error("Failed to read {path}: {message}")]
    File { path: String, message: String },

    #[error("connection refused: {0}")]
    Connect(String),

    #[error("request timed out")]
    Timeout,

    #[error("transport error: {0}")]
    Transport(String),

    #[error("service returned HTTP {0}")]
    Status(u16),

    #[error("malformed response: {0}")]
    Decode(String),

    #[error("{0} is not implemented")]
    NotImplemented(String),
}

impl SubmitError {
    pub fn from_reqwest(error: &reqwest::Error) -> Self {
        if error.is_timeout() {
            SubmitError::Timeout
        } else if let Some(status) = error.status() {
            SubmitError::Status(status.as_u16())
        } else if error.is_connect() {
            SubmitError::Connect(error.to_string())
        } else if error.is_decode() {
            SubmitError::Decode(error.to_string())
        } else {
            SubmitError::Transport(error.to_string())
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorType {
    MissingInput, // No file for video, unreadable file
    ConnectionRefused,
    Timeout,
    NotFound,    // HTTP 404
    ServerError, // HTTP 500+
    NetworkError,
    MalformedResponse,
    Unsupported,
    Other,
}

/// Classify a submission error for display
pub fn classify_error(error: &SubmitError) -> ErrorType {
    match error {
        SubmitError::MissingFile | SubmitError::File { .. } => ErrorType::MissingInput,
        SubmitError::Connect(_) => ErrorType::ConnectionRefused,
        SubmitError::Timeout => ErrorType::Timeout,
        SubmitError::Status(404) => ErrorType::NotFound,
        SubmitError::Status(500..=599) => ErrorType::ServerError,
        SubmitError::Status(_) => ErrorType::Other,
        SubmitError::Transport(_) => ErrorType::NetworkError,
        SubmitError::Decode(_) => ErrorType::MalformedResponse,
        SubmitError::NotImplemented(_) => ErrorType::Unsupported,
    }
}

/// Short message for the toast line, prefixed so the toast renders as an error
pub fn format_error_message(error: &SubmitError) -> String {
    let summary = match classify_error(error) {
        ErrorType::MissingInput => error.to_string(),
        ErrorType::ConnectionRefused => "Verification service unreachable".to_string(),
        ErrorType::Timeout => "Verification request timed out".to_string(),
        ErrorType::NotFound => "Verification endpoint not found (HTTP 404)".to_string(),
        ErrorType::ServerError => format!("Verification service failed ({})", error),
        ErrorType::NetworkError => format!("Network error ({})", error),
        ErrorType::MalformedResponse => "Unexpected response from verification service".to_string(),
        ErrorType::Unsupported => error.to_string(),
        ErrorType::Other => error.to_string(),
    };
    format!("Error: {}", summary)
}
