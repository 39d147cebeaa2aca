//! A chat client bound to one backend **and** one model.
//!
//! ```rust,ignore
//! use chatline_core::{ChatClient, model::Model};
//!
//! let client = ChatClient::new(backend, Model::custom("claude-code"));
//! let reply = client.invoke("hi! Reply in one short sentence.").await?;
//! println!("{}", reply.content);
//! ```
//!
//! Any backend crate (e.g. `chatline-openai`) just implements
//! [`ChatCompletionProvider`] and the same client works out of the box.
use std::{future::Future, pin::Pin, sync::Arc};

use crate::{
    error::Result,
    generic::GenericChatCompletionResponse,
    model::Model,
    provider::{ChatCompleteParameters, ChatCompletionProvider},
    template::IntoPrompt,
};

/// A client bound to a single provider and model.
///
/// Cloning is cheap: the backend lives behind an `Arc`.
#[derive(Debug)]
pub struct ChatClient<B> {
    backend: Arc<B>,
    model: Model,
}

impl<B> Clone for ChatClient<B> {
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
            model: self.model.clone(),
        }
    }
}

impl<B> ChatClient<B>
where
    B: ChatCompletionProvider,
{
    /// Create a new client that sends every prompt to `model` on `backend`.
    pub fn new(backend: B, model: impl Into<Model>) -> Self {
        Self {
            backend: Arc::new(backend),
            model: model.into(),
        }
    }

    /// Access the underlying backend (e.g. to tweak provider-specific settings).
    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    /// Send `prompt` as a fresh conversation and wait for the reply.
    ///
    /// No retries: transport, status and shape failures are returned as-is.
    pub async fn invoke<P>(&self, prompt: P) -> Result<GenericChatCompletionResponse>
    where
        P: IntoPrompt,
        P::Message: Into<B::Message>,
    {
        let params = ChatCompleteParameters::new(prompt.into_prompt(), self.model.clone());
        self.backend.chat_complete(params).await
    }
}

impl<B: ChatCompletionProvider + 'static> ChatCompletionProvider for ChatClient<B> {
    type Message = B::Message;

    fn chat_complete<'p, M>(
        &self,
        params: ChatCompleteParameters<M>,
    ) -> Pin<Box<dyn Future<Output = Result<GenericChatCompletionResponse>> + Send + 'p>>
    where
        M: Into<Self::Message> + Send + Sync + 'p,
    {
        let backend = Arc::clone(&self.backend);
        Box::pin(async move { backend.chat_complete(params).await })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::generic::{GenericMessage, GenericRole};

    #[derive(Default)]
    struct RecordingBackend {
        seen: Mutex<Vec<(Model, Vec<GenericMessage>)>>,
    }

    impl ChatCompletionProvider for RecordingBackend {
        type Message = GenericMessage;

        fn chat_complete<'p, M>(
            &self,
            params: ChatCompleteParameters<M>,
        ) -> Pin<Box<dyn Future<Output = Result<GenericChatCompletionResponse>> + Send + 'p>>
        where
            M: Into<Self::Message> + Send + Sync + 'p,
        {
            let model = params.model().clone();
            let messages: Vec<GenericMessage> =
                params.into_messages().into_iter().map(Into::into).collect();
            let reply = format!("echo: {}", messages[0].content);
            self.seen.lock().unwrap().push((model, messages));

            Box::pin(async move {
                Ok(GenericChatCompletionResponse {
                    content: reply,
                    usage: None,
                })
            })
        }
    }

    #[tokio::test]
    async fn invoke_sends_one_user_message_to_the_bound_model() {
        let client = ChatClient::new(RecordingBackend::default(), Model::custom("claude-code"));

        let reply = client.invoke("hi there").await.unwrap();
        assert_eq!(reply.content, "echo: hi there");

        let seen = client.backend().seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        let (model, messages) = &seen[0];
        assert_eq!(model, &Model::custom("claude-code"));
        assert_eq!(messages, &vec![GenericMessage::new("hi there".into(), GenericRole::User)]);
    }

    #[tokio::test]
    async fn cloned_clients_share_the_backend() {
        let client = ChatClient::new(RecordingBackend::default(), Model::custom("m"));
        let other = client.clone();

        other.invoke("one").await.unwrap();
        client.invoke("two").await.unwrap();

        assert_eq!(client.backend().seen.lock().unwrap().len(), 2);
    }
}
