use std::{future::Future, pin::Pin, sync::Arc};

use chatline_core::{
    error::Result,
    generic::{GenericChatCompletionResponse, GenericUsageReport},
    provider::{ChatCompleteParameters, ChatCompletionProvider},
};

use crate::{
    OpenAiAdapter,
    api_v1::{ChatCompletionMessage, ChatCompletionRequest},
    error::OpenAiError,
};

impl ChatCompletionProvider for OpenAiAdapter {
    type Message = ChatCompletionMessage;

    fn chat_complete<'p, M>(
        &self,
        params: ChatCompleteParameters<M>,
    ) -> Pin<Box<dyn Future<Output = Result<GenericChatCompletionResponse>> + Send + 'p>>
    where
        M: Into<Self::Message> + Send + Sync + 'p,
    {
        let client = Arc::clone(&self.client);

        Box::pin(async move {
            let request = ChatCompletionRequest::from(params);

            let response = client.chat_completion(request).await?;

            let usage = response.usage.map(GenericUsageReport::from);

            #[cfg(feature = "tracing")]
            {
                if let Some(usage) = &usage {
                    tracing::debug!(
                        prompt_tokens = usage.prompt_tokens,
                        completion_tokens = usage.completion_tokens,
                        total_tokens = usage.total_tokens,
                        "chat completion usage"
                    );
                }
            }

            let content = response.into_first_content().ok_or_else(|| {
                OpenAiError::Format("no choice in the response carries text content".into())
            })?;

            Ok(GenericChatCompletionResponse { content, usage })
        })
    }
}
