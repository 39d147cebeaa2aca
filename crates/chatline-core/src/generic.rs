//! Generic message and role types used by the *chatline-core* crate.
//!
//! They mirror the concepts exposed by most provider APIs: “system”, “user”,
//! “assistant”, and “tool”. Staying provider-agnostic lets backends convert
//! them into their own wire structs via a plain `From`/`Into`, and lets unit
//! tests build conversations without a transport layer.
use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Lightweight container representing a single chat message that is
/// independent of any specific LLM provider.
///
/// * `content` – the raw UTF-8 content.
/// * `role` – see [`GenericRole`] for permitted values.
/// * `name` – optional participant name, forwarded verbatim when set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenericMessage {
    pub content: String,
    pub role: GenericRole,
    pub name: Option<String>,
}

impl GenericMessage {
    /// Convenience constructor mirroring the field order used by common HTTP
    /// APIs (`role`, then `content`).
    ///
    /// ```rust
    /// use chatline_core::generic::{GenericMessage, GenericRole};
    ///
    /// let sys = GenericMessage::new("You are a helpful bot.".into(),
    ///                               GenericRole::System);
    /// assert_eq!(sys.role, GenericRole::System);
    /// ```
    pub fn new(message: String, role: GenericRole) -> Self {
        Self {
            content: message,
            role,
            name: None,
        }
    }

    /// Shorthand for a message with role [`GenericRole::User`].
    pub fn user(message: impl Into<String>) -> Self {
        Self::new(message.into(), GenericRole::User)
    }

    pub fn with_name(mut self, name: impl ToString) -> Self {
        self.name = Some(name.to_string());
        self
    }
}

/// High-level chat roles recognised by most LLM providers.
///
/// The `Display` implementation renders the canonical lowercase name.
#[derive(Debug, Clone, Serialize, Deserialize, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GenericRole {
    /// “System” messages define global behaviour and style guidelines.
    System,
    /// Messages produced by the assistant / model.
    Assistant,
    /// Messages originating from the human user.
    User,
    /// Result of a tool invocation injected into the conversation.
    Tool,
}

impl Display for GenericRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenericRole::System => write!(f, "system"),
            GenericRole::Assistant => write!(f, "assistant"),
            GenericRole::User => write!(f, "user"),
            GenericRole::Tool => write!(f, "tool"),
        }
    }
}

/// The reply of a single, non-streaming chat completion.
///
/// Only the textual `content` is guaranteed; backends fail with
/// [`ChatError::Protocol`](crate::error::ChatError::Protocol) rather than
/// returning a reply without it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenericChatCompletionResponse {
    pub content: String,
    pub usage: Option<GenericUsageReport>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenericUsageReport {
    pub prompt_tokens: i64,
    pub completion_tokens: i64,
    pub total_tokens: i64,
}
