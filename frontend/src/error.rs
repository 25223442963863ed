use reqwest::StatusCode;
use thiserror::Error;

/// Failure of a request to the dashboard API.
///
/// Callers can treat every variant the same way ("the request failed");
/// the variants only keep the cause readable in logs.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid request URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Request to {url} failed: HTTP {status}")]
    Status { url: String, status: StatusCode },

    #[error("Failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl ApiError {
    /// HTTP status of the response, when the server answered at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_message() {
        let err = ApiError::Status {
            url: "http://localhost:5000/api/dashboard".to_string(),
            status: StatusCode::INTERNAL_SERVER_ERROR,
        };
        assert_eq!(
            err.to_string(),
            "Request to http://localhost:5000/api/dashboard failed: HTTP 500 Internal Server Error"
        );
        assert_eq!(err.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
    }

    #[test]
    fn test_invalid_url_has_no_status() {
        let err = ApiError::InvalidUrl {
            url: "/api/dashboard".to_string(),
            reason: "no origin".to_string(),
        };
        assert_eq!(err.status(), None);
        assert!(err.to_string().contains("/api/dashboard"));
    }
}
