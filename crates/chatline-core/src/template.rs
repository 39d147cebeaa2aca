//! Turning values into chat messages.
//!
//! [`IntoPrompt`] is the single conversion the client needs to go from “some
//! text” to a ready-to-send conversation. Plain strings become a conversation
//! of length one with role `user`:
//!
//! ```rust
//! use chatline_core::template::IntoPrompt;
//! use chatline_core::generic::GenericRole;
//!
//! let messages = "hi! Reply in one short sentence.".into_prompt();
//! assert_eq!(messages.len(), 1);
//! assert_eq!(messages[0].role, GenericRole::User);
//! ```
use crate::generic::GenericMessage;

/// Converts a value into a series of chat messages.
///
/// Providers typically consume [`GenericMessage`], but a back-end can require
/// its own richer struct. Making `Message` an **associated type** keeps the
/// trait flexible without resorting to dynamic dispatch.
pub trait IntoPrompt {
    /// Chat message representation emitted by the prompt.
    type Message: Send + Sync + 'static;

    /// Consume `self` and return **all** messages in the desired order.
    fn into_prompt(self) -> Vec<Self::Message>;
}

/// A single [`GenericMessage`] can be passed directly to the client.
impl IntoPrompt for GenericMessage {
    type Message = GenericMessage;

    fn into_prompt(self) -> Vec<Self::Message> {
        vec![self]
    }
}

impl IntoPrompt for &str {
    type Message = GenericMessage;

    fn into_prompt(self) -> Vec<Self::Message> {
        vec![GenericMessage::user(self)]
    }
}

impl IntoPrompt for String {
    type Message = GenericMessage;

    fn into_prompt(self) -> Vec<Self::Message> {
        vec![GenericMessage::user(self)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generic::GenericRole;

    #[test]
    fn string_prompt_is_a_single_user_message() {
        let messages = String::from("What is 2 + 2?").into_prompt();
        assert_eq!(
            messages,
            vec![GenericMessage::new("What is 2 + 2?".into(), GenericRole::User)]
        );
    }

    #[test]
    fn generic_message_keeps_its_role() {
        let messages =
            GenericMessage::new("Be brief.".into(), GenericRole::System).into_prompt();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].role, GenericRole::System);
    }
}
