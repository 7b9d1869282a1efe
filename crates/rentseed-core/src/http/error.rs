//! Transport error for a single HTTP exchange.

use thiserror::Error;

/// Error returned by one GET or POST (curl failure or non-2xx status).
#[derive(Debug, Error)]
pub enum FetchError {
    /// Curl reported an error (timeout, connection, invalid URL, etc.).
    #[error("{0}")]
    Curl(#[from] curl::Error),
    /// HTTP response had a non-2xx status.
    #[error("HTTP {0}")]
    Http(u32),
}

impl FetchError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, FetchError::Curl(e) if e.is_operation_timedout())
    }
}
