//! Error types for the store client.

use fastspring_core::{CredentialError, XmlError};
use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur when interacting with the store API.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A required argument was empty. Raised before any request is sent.
    #[error("{name} is empty")]
    InvalidArgument {
        /// Name of the offending argument.
        name: &'static str,
    },

    /// The store credential is invalid.
    #[error("invalid credential: {0}")]
    Credential(#[from] CredentialError),

    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A request header could not be built.
    #[error("invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    /// A non-reqwest transport failed to complete the exchange.
    #[error("transport error: {0}")]
    Transport(String),

    /// The response carried no body where one was expected.
    #[error("no response body")]
    MissingResponseBody,

    /// Request or response XML could not be processed.
    #[error(transparent)]
    Xml(#[from] XmlError),

    /// 400: the vendor rejected the request.
    #[error("invalid request: {body}")]
    InvalidRequest {
        /// Response body text.
        body: String,
    },

    /// 403: a canceled subscription can no longer be reactivated.
    #[error("un-canceling the subscription is no longer possible")]
    UncancelNotPossible {
        /// Response body text.
        body: String,
    },

    /// 412: a precondition of the change was not met.
    #[error("precondition failed: {status_text} {body}")]
    PreconditionFailed {
        /// HTTP status description.
        status_text: String,
        /// Response body text.
        body: String,
    },

    /// 422: the product path in the update is unknown.
    #[error("unknown product path")]
    UnknownProductPath {
        /// Response body text.
        body: String,
    },

    /// 500: the vendor failed without further detail.
    #[error("unknown server error")]
    ServerError {
        /// Response body text.
        body: String,
    },

    /// Any other non-success status.
    #[error("API error: {status} - {}", api_message(.status_text, .body))]
    Api {
        /// HTTP status code.
        status: u16,
        /// HTTP status description.
        status_text: String,
        /// Response body text.
        body: String,
    },
}

impl StoreError {
    /// Map a failed state-changing call to its domain error.
    pub(crate) fn from_status(status: StatusCode, body: String) -> Self {
        match status.as_u16() {
            400 => Self::InvalidRequest { body },
            403 => Self::UncancelNotPossible { body },
            412 => Self::PreconditionFailed {
                status_text: status_text(status),
                body,
            },
            422 => Self::UnknownProductPath { body },
            500 => Self::ServerError { body },
            _ => Self::api(status, body),
        }
    }

    /// Raw status error without domain mapping.
    pub(crate) fn api(status: StatusCode, body: String) -> Self {
        Self::Api {
            status: status.as_u16(),
            status_text: status_text(status),
            body,
        }
    }

    /// HTTP status code, for errors produced by a non-success response.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::InvalidRequest { .. } => Some(400),
            Self::UncancelNotPossible { .. } => Some(403),
            Self::PreconditionFailed { .. } => Some(412),
            Self::UnknownProductPath { .. } => Some(422),
            Self::ServerError { .. } => Some(500),
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the error was produced by a non-success HTTP status.
    #[must_use]
    pub const fn is_status_error(&self) -> bool {
        self.status().is_some()
    }

    /// Response body text of a non-success response.
    #[must_use]
    pub fn response_body(&self) -> Option<&str> {
        match self {
            Self::InvalidRequest { body }
            | Self::UncancelNotPossible { body }
            | Self::PreconditionFailed { body, .. }
            | Self::UnknownProductPath { body }
            | Self::ServerError { body }
            | Self::Api { body, .. } => Some(body),
            _ => None,
        }
    }
}

fn status_text(status: StatusCode) -> String {
    status.canonical_reason().unwrap_or_default().to_string()
}

fn api_message<'a>(status_text: &'a str, body: &'a str) -> &'a str {
    if body.trim().is_empty() {
        status_text
    } else {
        body
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapped_statuses() {
        let err = StoreError::from_status(StatusCode::BAD_REQUEST, "bad quantity".to_string());
        assert!(matches!(err, StoreError::InvalidRequest { .. }));
        assert_eq!(err.to_string(), "invalid request: bad quantity");

        let err = StoreError::from_status(StatusCode::FORBIDDEN, "nope".to_string());
        assert_eq!(
            err.to_string(),
            "un-canceling the subscription is no longer possible"
        );
        assert_eq!(err.response_body(), Some("nope"));

        let err = StoreError::from_status(StatusCode::PRECONDITION_FAILED, "stale".to_string());
        assert_eq!(err.to_string(), "precondition failed: Precondition Failed stale");

        let err = StoreError::from_status(StatusCode::UNPROCESSABLE_ENTITY, String::new());
        assert_eq!(err.to_string(), "unknown product path");

        let err = StoreError::from_status(StatusCode::INTERNAL_SERVER_ERROR, String::new());
        assert_eq!(err.to_string(), "unknown server error");
        assert_eq!(err.status(), Some(500));
    }

    #[test]
    fn test_unmapped_status_surfaces_body() {
        let err = StoreError::from_status(StatusCode::NOT_FOUND, "no such subscription".to_string());
        assert!(matches!(err, StoreError::Api { status: 404, .. }));
        assert_eq!(err.to_string(), "API error: 404 - no such subscription");
    }

    #[test]
    fn test_unmapped_status_falls_back_to_status_text() {
        let err = StoreError::from_status(StatusCode::CONFLICT, "  ".to_string());
        assert_eq!(err.to_string(), "API error: 409 - Conflict");
    }

    #[test]
    fn test_non_status_errors() {
        let err = StoreError::InvalidArgument { name: "reference" };
        assert_eq!(err.to_string(), "reference is empty");
        assert!(!err.is_status_error());
        assert_eq!(err.response_body(), None);
        assert!(!StoreError::MissingResponseBody.is_status_error());
    }
}
