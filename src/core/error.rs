use std::fmt;

use thiserror::Error;

/// Closed set of remote failure categories.
///
/// The transport adapter is responsible for mapping raw failures (status codes,
/// connection errors, error bodies) into one of these. The retry policy only
/// ever looks at the tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceErrorKind {
    RateLimited,
    Timeout,
    Connection,
    ServerError,
    Overloaded,
    Authentication,
    InvalidRequest,
    /// The model family rejected a parameter (e.g. `temperature` on a reasoning model).
    UnsupportedParameter,
    Refusal,
    MalformedResponse,
    Cancelled,
    Unknown,
}

impl ServiceErrorKind {
    /// Transient failures that are safe to reattempt against the same model.
    pub fn is_retryable(self) -> bool {
        matches!(
            self,
            ServiceErrorKind::RateLimited
                | ServiceErrorKind::Timeout
                | ServiceErrorKind::Connection
                | ServiceErrorKind::ServerError
                | ServiceErrorKind::Overloaded
        )
    }
}

impl fmt::Display for ServiceErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ServiceErrorKind::RateLimited => "rate limited",
            ServiceErrorKind::Timeout => "timeout",
            ServiceErrorKind::Connection => "connection failure",
            ServiceErrorKind::ServerError => "server error",
            ServiceErrorKind::Overloaded => "overloaded",
            ServiceErrorKind::Authentication => "authentication failure",
            ServiceErrorKind::InvalidRequest => "invalid request",
            ServiceErrorKind::UnsupportedParameter => "unsupported parameter",
            ServiceErrorKind::Refusal => "refusal",
            ServiceErrorKind::MalformedResponse => "malformed response",
            ServiceErrorKind::Cancelled => "cancelled",
            ServiceErrorKind::Unknown => "unknown error",
        };
        f.write_str(label)
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LlmError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Service error ({kind}): {message}")]
    Service {
        kind: ServiceErrorKind,
        message: String,
        status_code: Option<u16>,
    },

    #[error("All {models} model(s) failed after {attempts} attempt(s): {last}")]
    Exhausted {
        attempts: u32,
        models: usize,
        #[source]
        last: Box<LlmError>,
    },

    #[error("Document search failed: {0}")]
    Search(String),
}

impl LlmError {
    pub fn service(kind: ServiceErrorKind, message: impl Into<String>) -> Self {
        LlmError::Service {
            kind,
            message: message.into(),
            status_code: None,
        }
    }

    /// Tag of a service failure, `None` for everything else.
    pub fn kind(&self) -> Option<ServiceErrorKind> {
        match self {
            LlmError::Service { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    pub fn is_retryable(&self) -> bool {
        self.kind().is_some_and(ServiceErrorKind::is_retryable)
    }

    /// The error that ended the final attempt. For anything other than
    /// `Exhausted` this is the error itself.
    pub fn last_error(&self) -> &LlmError {
        match self {
            LlmError::Exhausted { last, .. } => last,
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transient_kinds_are_retryable() {
        for kind in [
            ServiceErrorKind::RateLimited,
            ServiceErrorKind::Timeout,
            ServiceErrorKind::Connection,
            ServiceErrorKind::ServerError,
            ServiceErrorKind::Overloaded,
        ] {
            assert!(kind.is_retryable(), "{kind} should be retryable");
        }

        for kind in [
            ServiceErrorKind::Authentication,
            ServiceErrorKind::InvalidRequest,
            ServiceErrorKind::UnsupportedParameter,
            ServiceErrorKind::Refusal,
            ServiceErrorKind::MalformedResponse,
            ServiceErrorKind::Cancelled,
            ServiceErrorKind::Unknown,
        ] {
            assert!(!kind.is_retryable(), "{kind} should not be retryable");
        }
    }

    #[test]
    fn test_configuration_error_is_not_retryable() {
        let err = LlmError::Configuration("no models".to_string());
        assert!(!err.is_retryable());
        assert_eq!(err.kind(), None);
    }

    #[test]
    fn test_exhausted_exposes_last_error() {
        let last = LlmError::service(ServiceErrorKind::Overloaded, "engine overloaded");
        let err = LlmError::Exhausted {
            attempts: 4,
            models: 2,
            last: Box::new(last.clone()),
        };

        assert_eq!(err.last_error(), &last);
        assert!(err.to_string().contains("engine overloaded"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
