//! Request failure classification for REST calls.
//!
//! The `Display` text of each variant is what the widgets show inline, so the
//! messages are written for end users rather than for logs.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Errors produced by assistant and conversation-starter requests.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-success status.
    #[error("request failed with status {0}")]
    Status(u16),

    /// The response body was not the expected JSON shape.
    #[error("unexpected response: {0}")]
    Decode(String),

    /// HTTP is only reachable from the browser build.
    #[error("not available on server")]
    Unavailable,
}
