//! NocoDB client error types.

use thiserror::Error;

/// Errors that can occur when talking to the NocoDB meta API.
#[derive(Debug, Error)]
pub enum NocoDbError {
    /// HTTP transport error, including request timeouts.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// NocoDB returned a status the caller does not accept.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by NocoDB.
        status: u16,
        /// Response body, truncated for display.
        message: String,
    },

    /// A success response whose body could not be read as table metadata.
    #[error("parse error: {0}")]
    Parse(String),

    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

impl NocoDbError {
    /// HTTP status of an API error, if the server answered at all.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the request ran into the client timeout.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Http(e) if e.is_timeout())
    }

    /// One-line description including every source in the chain.
    ///
    /// reqwest keeps the interesting part ("operation timed out",
    /// "connection refused") in nested sources.
    #[must_use]
    pub fn detail(&self) -> String {
        let mut out = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(cause) = source {
            let text = cause.to_string();
            if !out.contains(&text) {
                out.push_str(": ");
                out.push_str(&text);
            }
            source = cause.source();
        }
        out
    }
}
