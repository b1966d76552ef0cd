//! Error types for the create-user client.
//!
//! # Design
//! Transport errors (`HttpStatus`, `Transport`) carry everything the caller
//! needs to inspect the failure: status code and body when a response
//! arrived, the underlying I/O error when none did. Anything else that goes
//! wrong is reported as `Unexpected` with a fixed message, but the original
//! error stays reachable through `source()`.

use thiserror::Error;
use validator::ValidationErrors;

/// Errors returned by `UserClient`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    /// No response was obtained: connection refused, DNS failure, TLS,
    /// timeout or I/O error.
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The payload does not satisfy the request schema. Nothing was sent.
    #[error("request failed schema validation: {0}")]
    InvalidRequest(#[from] ValidationErrors),

    /// Any failure that is not a transport error.
    #[error("unexpected error occurred")]
    Unexpected(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ApiError {
    pub fn unexpected(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        ApiError::Unexpected(Box::new(err))
    }

    /// True for failures reported by the HTTP layer itself.
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::HttpStatus { .. } | ApiError::Transport(_))
    }

    /// Status code of the server's response, if one arrived.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Body of the server's response, if one arrived.
    pub fn body(&self) -> Option<&str> {
        match self {
            ApiError::HttpStatus { body, .. } => Some(body),
            _ => None,
        }
    }
}
