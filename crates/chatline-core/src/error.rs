//! Unified error type exposed by **`chatline-core`**.
//!
//! Provider crates convert their internal errors into one of these variants
//! before bubbling them up to the [`ChatClient`](crate::ChatClient). The three
//! transport-level outcomes of a chat call map onto dedicated variants:
//!
//! * [`ChatError::Connection`] – the endpoint could not be reached.
//! * [`ChatError::Server`] – the endpoint answered with a non-success status.
//! * [`ChatError::Protocol`] – the endpoint answered, but not with a usable
//!   chat-completion body.
//!
//! Everything else describes a problem detected locally, before any request
//! left the process.

use thiserror::Error;

/// Convenient alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, ChatError>;

#[derive(Debug, Error)]
pub enum ChatError {
    /// The endpoint is unreachable, refused the connection or the transport
    /// failed while the response was in flight.
    #[error("could not reach chat endpoint")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),

    /// The endpoint is reachable but returned a non-success HTTP status.
    #[error("chat endpoint returned status {status}: {body}")]
    Server { status: u16, body: String },

    /// The response body does not have the expected chat-completion shape,
    /// e.g. no choice carries textual content.
    #[error("unexpected chat completion response: {0}")]
    Protocol(String),

    /// Local configuration problem, e.g. a malformed base URL.
    #[error("invalid: {0}")]
    Invalid(String),
}

impl ChatError {
    /// Wrap any transport error as [`ChatError::Connection`].
    pub fn connection(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        ChatError::Connection(Box::new(err))
    }
}
