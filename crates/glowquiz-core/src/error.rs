//! Error types for Glowquiz

use thiserror::Error;

/// Main error type for recommendation service interactions
#[derive(Error, Debug)]
pub enum QuizError {
    /// Transport-level failure talking to the service
    #[error("Request error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status
    #[error("Service returned status {status} from {endpoint}")]
    UnexpectedStatus {
        endpoint: &'static str,
        status: u16,
    },

    /// The response body did not match the expected shape
    #[error("Malformed response from {endpoint}: {message}")]
    Parse {
        endpoint: &'static str,
        message: String,
    },
}

/// Result type alias using QuizError
pub type QuizResult<T> = Result<T, QuizError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_display() {
        let err = QuizError::UnexpectedStatus {
            endpoint: "/upload-image",
            status: 500,
        };
        assert_eq!(
            format!("{}", err),
            "Service returned status 500 from /upload-image"
        );
    }

    #[test]
    fn test_parse_error_display() {
        let err = QuizError::Parse {
            endpoint: "/full-makeup-recommend",
            message: "missing field `recommendations`".to_string(),
        };
        let rendered = format!("{}", err);
        assert!(rendered.contains("/full-makeup-recommend"));
        assert!(rendered.contains("missing field"));
    }
}
