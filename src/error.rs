//! Error Types
//!
//! Failures of calls to the backend service.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Request never produced a response (offline, CORS, DNS, ...)
    #[error("network error: {0}")]
    Network(String),
    /// Backend answered with a non-success status
    #[error("server returned {status}: {message}")]
    Status { status: u16, message: String },
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("could not build request: {0}")]
    Build(String),
    /// Refused locally before any request was sent
    #[error("{0}")]
    Rejected(String),
}

impl ApiError {
    /// Worth offering a retry for
    pub fn is_transient(&self) -> bool {
        match self {
            ApiError::Network(_) => true,
            ApiError::Status { status, .. } => *status >= 500 || *status == 408 || *status == 429,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transient_classification() {
        assert!(ApiError::Network("offline".into()).is_transient());
        assert!(ApiError::Status { status: 503, message: String::new() }.is_transient());
        assert!(!ApiError::Status { status: 400, message: "No items provided".into() }.is_transient());
        assert!(!ApiError::Decode("eof".into()).is_transient());
    }

    #[test]
    fn test_display() {
        let err = ApiError::Status { status: 404, message: "not found".into() };
        assert_eq!(err.to_string(), "server returned 404: not found");
    }
}
