use thiserror::Error;

/// Any failure of a call to the restaurants backend.
///
/// Callers treat this opaquely; the variants exist so the cause can be logged.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("server responded with status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("could not decode response body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("could not build request URL from '{0}'")]
    InvalidUrl(String),
}

impl TransportError {
    /// Status code for non-2xx responses.
    pub fn status(&self) -> Option<u16> {
        match self {
            TransportError::Status { status, .. } => Some(*status),
            TransportError::Request(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
