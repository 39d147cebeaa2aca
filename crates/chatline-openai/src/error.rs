use chatline_core::error::ChatError;
use reqwest::StatusCode;

/// High-level error type covering every failure mode the client can hit.
#[derive(Debug, thiserror::Error)]
pub enum OpenAiError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("couldn’t decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("endpoint returned non-success status {status}: {body}")]
    Api { status: StatusCode, body: String },

    #[error("response format error: {0}")]
    Format(String),

    #[error("API key is not a valid header value: {0}")]
    InvalidApiKey(#[from] reqwest::header::InvalidHeaderValue),
}

impl From<OpenAiError> for ChatError {
    fn from(value: OpenAiError) -> Self {
        match value {
            OpenAiError::Http(err) => ChatError::connection(err),
            OpenAiError::Api { status, body } => ChatError::Server {
                status: status.as_u16(),
                body,
            },
            OpenAiError::Decode(err) => ChatError::Protocol(format!("malformed body: {err}")),
            OpenAiError::Format(msg) => ChatError::Protocol(msg),
            err @ OpenAiError::InvalidApiKey(_) => ChatError::Invalid(err.to_string()),
        }
    }
}
