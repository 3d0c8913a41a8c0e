//! Candlepin client error types.

use std::fmt;
use thiserror::Error;

/// Result type for Candlepin operations.
pub type CandlepinResult<T> = Result<T, CandlepinError>;

/// Step of consumer creation that runs after the consumer already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateStep {
    /// Initial entitlement bind.
    Bind,
    /// Recording the last checkin time.
    Checkin,
}

impl fmt::Display for CreateStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CreateStep::Bind => f.write_str("bind"),
            CreateStep::Checkin => f.write_str("checkin"),
        }
    }
}

/// Errors that can occur talking to Candlepin.
#[derive(Debug, Error)]
pub enum CandlepinError {
    /// Caller passed a path without a leading `/`.
    #[error("request path must begin with '/': {0:?}")]
    InvalidPath(String),

    /// HTTP 404.
    #[error("not found")]
    NotFound,

    /// Any status other than 200, 204 or 404.
    #[error("bad response code: {status}")]
    RequestFailed { status: u16, body: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid base64 payload: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),

    #[error("invalid checkin date: {0}")]
    InvalidDate(#[from] splice_types::Error),

    /// The consumer exists server-side but was not fully initialized.
    #[error("consumer {uuid} was created but the {step} step failed: {source}")]
    PartialCreate {
        uuid: String,
        step: CreateStep,
        #[source]
        source: Box<CandlepinError>,
    },

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl CandlepinError {
    /// Returns true for a 404, which callers may treat as absence.
    pub fn is_not_found(&self) -> bool {
        matches!(self, CandlepinError::NotFound)
    }

    /// Returns the HTTP status carried by a failed request.
    pub fn status(&self) -> Option<u16> {
        match self {
            CandlepinError::NotFound => Some(404),
            CandlepinError::RequestFailed { status, .. } => Some(*status),
            CandlepinError::Http(e) => e.status().map(|s| s.as_u16()),
            CandlepinError::PartialCreate { source, .. } => source.status(),
            _ => None,
        }
    }

    /// Returns the uuid of a consumer left half-created.
    pub fn created_uuid(&self) -> Option<&str> {
        match self {
            CandlepinError::PartialCreate { uuid, .. } => Some(uuid),
            _ => None,
        }
    }
}
