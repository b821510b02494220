//! Remote call failures.

use thiserror::Error;

/// Errors returned by a [`Gateway`](super::Gateway) call.
#[derive(Debug, Clone, Error)]
pub enum GatewayError {
    /// The service answered with a non-2xx status.
    #[error("HTTP {status}: {}", message.as_deref().unwrap_or("<no message>"))]
    Status {
        status: u16,
        /// `message` field of the error body, when the body had one.
        message: Option<String>,
    },

    /// The request never produced a response (connect, TLS, timeout, ...).
    #[error("Transport error: {0}")]
    Transport(String),

    /// The response body did not have the expected shape.
    #[error("Failed to decode response: {0}")]
    Decode(String),
}

impl GatewayError {
    /// Message the service attached to the failure, if any.
    ///
    /// Only status failures carry one; transport and decode failures never do.
    pub fn structured_message(&self) -> Option<&str> {
        match self {
            GatewayError::Status { message, .. } => message.as_deref().filter(|m| !m.is_empty()),
            GatewayError::Transport(_) | GatewayError::Decode(_) => None,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            GatewayError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for GatewayError {
    fn from(err: serde_json::Error) -> Self {
        GatewayError::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_with_message_is_structured() {
        let err = GatewayError::Status {
            status: 409,
            message: Some("Semester already exists".into()),
        };
        assert_eq!(err.structured_message(), Some("Semester already exists"));
        assert_eq!(err.status(), Some(409));
    }

    #[test]
    fn empty_message_is_not_structured() {
        let err = GatewayError::Status {
            status: 500,
            message: Some(String::new()),
        };
        assert_eq!(err.structured_message(), None);
    }

    #[test]
    fn transport_has_no_message() {
        let err = GatewayError::Transport("connection refused".into());
        assert_eq!(err.structured_message(), None);
        assert_eq!(err.status(), None);
    }
}
