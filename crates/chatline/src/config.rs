/// Where to send prompts and under which model name.
///
/// Built once at startup and never changed afterwards. Nothing beyond URL
/// well-formedness is checked locally: whether the server knows `model` or
/// cares about `api_key` is up to the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    api_key: String,
    base_url: String,
    model: String,
}

impl ClientConfig {
    pub fn new(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: base_url.into(),
            model: model.into(),
        }
    }

    /// The local adapter on port 8000 serving the `claude-code` model.
    ///
    /// The adapter ignores credentials, so the key is a dummy value.
    pub fn local_adapter() -> Self {
        Self::new("dummy-key", "http://localhost:8000/v1", "claude-code")
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Build an OpenAI-compatible backend from this config and bind it to
    /// the configured model.
    #[cfg(feature = "openai")]
    pub fn to_client(
        &self,
    ) -> chatline_core::error::Result<chatline_core::ChatClient<chatline_openai::OpenAiAdapter>>
    {
        let backend = chatline_openai::OpenAiAdapterBuilder::new()
            .with_api_key(self.api_key.as_str())
            .with_base_url(self.base_url.as_str())
            .build()?;

        Ok(chatline_core::ChatClient::new(
            backend,
            chatline_core::model::Model::custom(self.model.clone()),
        ))
    }
}
