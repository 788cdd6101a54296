//! Error types for the Crawlic client.

use std::time::Duration;

use thiserror::Error;

/// Rejected before any request is built.
///
/// The `Display` text is what the user sees in the blocking prompt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("Please enter your API key first")]
    MissingApiKey,

    #[error("Please enter your name and email")]
    MissingRegistrant,

    #[error("A request is already in progress")]
    Busy,
}

/// A request that was sent (or attempted) but produced no usable JSON.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("{0}")]
    Transport(String),

    #[error("request timed out after {}", timeout_text(.0))]
    Timeout(Duration),

    #[error("invalid JSON in response: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Whole seconds print as `30s`, anything finer as milliseconds.
fn timeout_text(timeout: &Duration) -> String {
    if timeout.subsec_nanos() == 0 {
        format!("{}s", timeout.as_secs())
    } else {
        format!("{}ms", timeout.as_millis())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EndpointError {
    #[error("unknown endpoint '{0}' (expected page-content, describe-page or find-contact-email)")]
    Unknown(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompts() {
        assert_eq!(
            SessionError::MissingApiKey.to_string(),
            "Please enter your API key first"
        );
        assert_eq!(
            SessionError::MissingRegistrant.to_string(),
            "Please enter your name and email"
        );
    }

    #[test]
    fn test_timeout_message() {
        let err = RequestError::Timeout(Duration::from_secs(30));
        assert_eq!(err.to_string(), "request timed out after 30s");
    }

    #[test]
    fn test_sub_second_timeout_message() {
        let err = RequestError::Timeout(Duration::from_millis(250));
        assert_eq!(err.to_string(), "request timed out after 250ms");

        let err = RequestError::Timeout(Duration::from_millis(1500));
        assert_eq!(err.to_string(), "request timed out after 1500ms");
    }
}
