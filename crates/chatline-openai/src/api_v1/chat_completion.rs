use chatline_core::generic::{GenericMessage, GenericRole, GenericUsageReport};
use chatline_core::provider::ChatCompleteParameters;
use serde::{Deserialize, Serialize};

use crate::impl_builder_methods;
use crate::model_map::map_model;

use super::common;

#[derive(Debug, Serialize, Clone)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatCompletionMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub n: Option<i64>,
}

impl ChatCompletionRequest {
    pub fn new(model: String, messages: Vec<ChatCompletionMessage>) -> Self {
        Self {
            model,
            messages,
            temperature: None,
            top_p: None,
            max_tokens: None,
            n: None,
        }
    }
}

impl_builder_methods!(
    ChatCompletionRequest,
    temperature: f64,
    top_p: f64,
    max_tokens: u32,
    n: i64
);

impl<M> From<ChatCompleteParameters<M>> for ChatCompletionRequest
where
    M: Into<ChatCompletionMessage>,
{
    fn from(value: ChatCompleteParameters<M>) -> Self {
        Self {
            model: map_model(&value.model).into_owned(),
            messages: value.messages.into_iter().map(Into::into).collect(),
            temperature: value.temperature,
            top_p: None,
            max_tokens: value.max_tokens,
            n: None,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MessageRole {
    User,
    System,
    Assistant,
    Tool,
    #[serde(other)]
    Other,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ChatCompletionMessage {
    pub role: MessageRole,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Assistant message inside a response choice.
///
/// `content` stays optional: servers send `null` for tool-call-only replies,
/// and a reply without text is a protocol error for callers that need text.
#[derive(Debug, Deserialize, Clone)]
pub struct ChatCompletionMessageForResponse {
    #[serde(default)]
    pub role: Option<MessageRole>,
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionChoice {
    #[serde(default)]
    pub index: i64,
    pub message: ChatCompletionMessageForResponse,
    #[serde(default)]
    pub finish_reason: Option<FinishReason>,
}

/// Response body of `POST /chat/completions`.
///
/// Only `choices` is mandatory; OpenAI-compatible servers differ a lot in
/// which bookkeeping fields they fill in.
#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub object: Option<String>,
    #[serde(default)]
    pub created: Option<i64>,
    #[serde(default)]
    pub model: Option<String>,
    pub choices: Vec<ChatCompletionChoice>,
    #[serde(default)]
    pub usage: Option<common::Usage>,
    #[serde(default)]
    pub system_fingerprint: Option<String>,
}

impl ChatCompletionResponse {
    /// Text of the first choice that carries any, in `choices` order.
    pub fn into_first_content(self) -> Option<String> {
        self.choices
            .into_iter()
            .find_map(|choice| choice.message.content)
    }
}

#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FinishReason {
    Stop,
    Length,
    ContentFilter,
    ToolCalls,
    #[serde(other)]
    Other,
}

impl From<GenericRole> for MessageRole {
    fn from(value: GenericRole) -> Self {
        match value {
            GenericRole::System => MessageRole::System,
            GenericRole::Assistant => MessageRole::Assistant,
            GenericRole::User => MessageRole::User,
            GenericRole::Tool => MessageRole::Tool,
        }
    }
}

impl From<GenericMessage> for ChatCompletionMessage {
    fn from(value: GenericMessage) -> Self {
        Self {
            role: value.role.into(),
            content: value.content,
            name: value.name,
        }
    }
}

impl From<common::Usage> for GenericUsageReport {
    fn from(value: common::Usage) -> Self {
        GenericUsageReport {
            prompt_tokens: value.prompt_tokens,
            completion_tokens: value.completion_tokens,
            total_tokens: value.total_tokens,
        }
    }
}

#[cfg(test)]
mod tests {
    use chatline_core::model::{Model, OpenAiModel};
    use serde_json::json;

    use super::*;

    #[test]
    fn request_body_only_carries_model_and_messages_by_default() {
        let params = ChatCompleteParameters::new(
            vec![GenericMessage::user("hi! Reply in one short sentence.")],
            Model::custom("claude-code"),
        );
        let request = ChatCompletionRequest::from(params);

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "model": "claude-code",
                "messages": [
                    { "role": "user", "content": "hi! Reply in one short sentence." }
                ]
            })
        );
    }

    #[test]
    fn optional_sampling_fields_are_forwarded() {
        let params = ChatCompleteParameters::new(
            vec![GenericMessage::user("hi")],
            Model::OpenAi(OpenAiModel::Gpt4oMini),
        )
        .with_temperature(0.2)
        .with_max_tokens(64);
        let request = ChatCompletionRequest::from(params).n(1);
        let body = serde_json::to_value(&request).unwrap();

        assert_eq!(body["model"], "gpt-4o-mini");
        assert_eq!(body["temperature"], 0.2);
        assert_eq!(body["max_tokens"], 64);
        assert_eq!(body["n"], 1);
        assert!(body.get("top_p").is_none());
    }

    #[test]
    fn minimal_response_decodes() {
        let response: ChatCompletionResponse = serde_json::from_value(json!({
            "choices": [
                { "message": { "role": "assistant", "content": "Hello! Nice to meet you." } }
            ]
        }))
        .unwrap();

        assert!(response.usage.is_none());
        assert_eq!(
            response.into_first_content().as_deref(),
            Some("Hello! Nice to meet you.")
        );
    }

    #[test]
    fn full_response_decodes_with_unknown_finish_reason() {
        let response: ChatCompletionResponse = serde_json::from_value(json!({
            "id": "chatcmpl-1",
            "object": "chat.completion",
            "created": 1_700_000_000,
            "model": "claude-code",
            "choices": [{
                "index": 0,
                "message": { "role": "assistant", "content": "ok" },
                "finish_reason": "end_turn"
            }],
            "usage": { "prompt_tokens": 12, "completion_tokens": 3, "total_tokens": 15 }
        }))
        .unwrap();

        assert_eq!(response.choices[0].finish_reason, Some(FinishReason::Other));
        assert_eq!(
            response.usage.map(GenericUsageReport::from),
            Some(GenericUsageReport {
                prompt_tokens: 12,
                completion_tokens: 3,
                total_tokens: 15,
            })
        );
    }

    #[test]
    fn unknown_roles_decode_as_other() {
        let response: ChatCompletionResponse = serde_json::from_value(json!({
            "choices": [{ "message": { "role": "model", "content": "hi" } }]
        }))
        .unwrap();

        assert_eq!(response.choices[0].message.role, Some(MessageRole::Other));
    }

    #[test]
    fn null_content_is_skipped_in_favour_of_a_later_choice() {
        let response: ChatCompletionResponse = serde_json::from_value(json!({
            "choices": [
                { "index": 0, "message": { "role": "assistant", "content": null } },
                { "index": 1, "message": { "role": "assistant", "content": "second" } }
            ]
        }))
        .unwrap();

        assert_eq!(response.into_first_content().as_deref(), Some("second"));
    }

    #[test]
    fn choices_without_content_yield_nothing() {
        let response: ChatCompletionResponse = serde_json::from_value(json!({
            "choices": [{ "message": { "role": "assistant" } }]
        }))
        .unwrap();

        assert_eq!(response.into_first_content(), None);
    }
}
