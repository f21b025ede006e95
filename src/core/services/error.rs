use reqwest::StatusCode;
use thiserror::Error;

/// Failure talking to the task API.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Transport failure (network down, CORS, malformed JSON body)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("API error (status {code}): {message}")]
    Status { code: u16, message: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl ApiError {
    pub fn status(status: StatusCode, message: impl Into<String>) -> Self {
        ApiError::Status {
            code: status.as_u16(),
            message: message.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Status { code: 404, .. })
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_keeps_code_and_message() {
        let err = ApiError::status(StatusCode::NOT_FOUND, "Tarefa não encontrada.");
        assert!(err.is_not_found());
        assert_eq!(
            err.to_string(),
            "API error (status 404): Tarefa não encontrada."
        );
    }

    #[test]
    fn other_statuses_are_not_not_found() {
        let err = ApiError::status(StatusCode::BAD_REQUEST, "Status inválido");
        assert!(!err.is_not_found());
    }
}
