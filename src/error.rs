//! Errors raised while delivering a record to the backend.
//!
//! Each variant names the pipeline stage that failed so the single line
//! written to a [`FailureSink`](crate::FailureSink) is enough to diagnose
//! a lost record.

use thiserror::Error;

/// Failure of one push to the backend.
#[derive(Debug, Error)]
pub enum LokiError {
    /// The payload could not be encoded as JSON.
    #[error("failed to build loki payload: {0}")]
    Serialisation(#[from] serde_json::Error),
    /// The outgoing request could not be constructed (bad URL, scheme or header).
    #[error("create post request to loki: {0}")]
    Request(String),
    /// The request never completed (DNS, connection, I/O or timeout failure).
    #[error("send post request to loki: {0}")]
    Network(String),
    /// The backend answered with a status other than 200 or 204.
    #[error("loki response: {status}\t request was: {body}")]
    Rejected {
        /// HTTP status code returned by the backend.
        status: u16,
        /// Request body that was sent.
        body: String,
    },
}

impl LokiError {
    /// Status code returned by the backend, if it answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}
