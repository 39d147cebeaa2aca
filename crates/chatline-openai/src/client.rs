use reqwest::{
    Client as HttpClient,
    header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue},
};

use crate::{
    api_v1::{ChatCompletionRequest, ChatCompletionResponse},
    error::OpenAiError,
};

pub(crate) const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Minimal HTTP client for the *chat/completions* route of any
/// OpenAI-compatible server.
///
/// * Non-streaming only (one request ▶ one response).
/// * Accepts and returns the `api_v1` request / response structs defined
///   in this crate.
/// * Shares a single `reqwest::Client`, so cloning `OpenAiClient` is cheap.
#[derive(Clone, Debug)]
pub struct OpenAiClient {
    http: HttpClient,
    base: String,
    headers: HeaderMap,
}

impl OpenAiClient {
    /// Build on top of an existing `reqwest::Client`.
    ///
    /// The API key is sent as a bearer token and never interpreted; any
    /// placeholder works against servers that ignore it. It only has to be a
    /// legal header value.
    pub fn with_http(
        api_key: impl AsRef<str>,
        http: HttpClient,
        base_url: Option<String>,
    ) -> Result<Self, OpenAiError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let mut bearer = HeaderValue::from_str(&format!("Bearer {}", api_key.as_ref()))?;
        bearer.set_sensitive(true);
        headers.insert(AUTHORIZATION, bearer);

        let base = base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_owned());

        Ok(Self {
            http,
            base: base.trim_end_matches('/').to_owned(),
            headers,
        })
    }

    /// Base URL every route is appended to, without trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base
    }

    /// Perform a **non-streaming** chat completion.
    pub async fn chat_completion(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, OpenAiError> {
        let url = format!("{}/chat/completions", self.base);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            %url,
            model = %request.model,
            messages = request.messages.len(),
            "sending chat completion request"
        );

        let resp = self
            .http
            .post(url)
            .headers(self.headers.clone())
            .json(&request)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();

            #[cfg(feature = "tracing")]
            tracing::warn!(%status, "chat completion endpoint returned an error status");

            return Err(OpenAiError::Api { status, body });
        }

        let bytes = resp.bytes().await?;
        let parsed: ChatCompletionResponse = serde_json::from_slice(&bytes)?;
        Ok(parsed)
    }
}
