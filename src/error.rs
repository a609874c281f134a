//! Error types for the ingest adapter.

use thiserror::Error;

/// Result type alias for adapter operations.
pub type Result<T> = std::result::Result<T, IngestError>;

/// Failures surfaced by [`crate::IngestAdapter::submit`]. Nothing is retried.
#[derive(Error, Debug)]
pub enum IngestError {
    /// The per-call HTTP client could not be constructed.
    #[error("Failed to create HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    /// Connection, DNS, timeout or body read failure.
    #[error("Ingest request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("Ingest endpoint rejected payload with status {status}: {body}")]
    Rejected { status: u16, body: String },

    /// The response body was not valid JSON.
    #[error("Failed to parse ingest response: {0}")]
    MalformedResponse(#[from] serde_json::Error),
}

impl IngestError {
    /// HTTP status of a rejected request, if the endpoint answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            IngestError::Rejected { status, .. } => Some(*status),
            IngestError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, IngestError::Transport(e) if e.is_timeout())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_exposes_status() {
        let err = IngestError::Rejected {
            status: 503,
            body: "down".to_string(),
        };
        assert_eq!(err.status(), Some(503));
        assert!(!err.is_timeout());
        assert_eq!(
            err.to_string(),
            "Ingest endpoint rejected payload with status 503: down"
        );
    }

    #[test]
    fn test_malformed_has_no_status() {
        let parse_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = IngestError::from(parse_err);
        assert!(matches!(err, IngestError::MalformedResponse(_)));
        assert_eq!(err.status(), None);
    }
}
