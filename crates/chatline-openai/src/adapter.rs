use std::{env, sync::Arc, time::Duration};

use chatline_core::error::{ChatError, Result};
use reqwest::{Client as HttpClient, Url};

use crate::client::OpenAiClient;

/// Thin wrapper that wires the HTTP client [`OpenAiClient`] into a value that
/// implements [`chatline_core::provider::ChatCompletionProvider`].
///
/// The type exposes no chat methods of its own; plug it into a
/// [`chatline_core::ChatClient`] to send prompts.
#[derive(Debug)]
pub struct OpenAiAdapter {
    pub(crate) client: Arc<OpenAiClient>,
}

impl OpenAiAdapter {
    /// Base URL the adapter talks to, without trailing slash.
    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }
}

/// Builder for [`OpenAiAdapter`].
///
/// # Typical usage
///
/// ```rust,no_run
/// use chatline_openai::OpenAiAdapterBuilder;
///
/// let backend = OpenAiAdapterBuilder::new()
///     .with_api_key("dummy-key")
///     .with_base_url("http://localhost:8000/v1")
///     .build()
///     .expect("valid adapter configuration");
/// ```
#[derive(Debug, Default, Clone)]
pub struct OpenAiAdapterBuilder {
    pub(crate) api_key: Option<String>,
    pub(crate) base_url: Option<String>,
    pub(crate) timeout: Option<Duration>,
}

impl OpenAiAdapterBuilder {
    /// Create an *empty* builder. Remember to supply an API key manually.
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience constructor that reads `OPENAI_API_KEY` and, if present,
    /// `OPENAI_BASE_URL` from the environment.
    ///
    /// Missing values only surface during [`Self::build`].
    pub fn new_from_env() -> Self {
        Self {
            api_key: env::var("OPENAI_API_KEY").ok(),
            base_url: env::var("OPENAI_BASE_URL").ok(),
            timeout: None,
        }
    }

    /// Key sent as bearer token. Servers that do not authenticate accept any
    /// placeholder.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Root of the OpenAI-compatible API, e.g. `http://localhost:8000/v1`.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Upper bound for a whole request. Without one, requests wait as long
    /// as the server takes.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Finalise the builder and return a ready-to-use adapter.
    ///
    /// # Errors
    ///
    /// * [`ChatError::Invalid`] – if the API key is missing, is not a legal
    ///   header value, or the base URL is not an absolute `http(s)` URL.
    pub fn build(self) -> Result<OpenAiAdapter> {
        let api_key = self
            .api_key
            .ok_or_else(|| ChatError::Invalid("missing API key: `OPENAI_API_KEY`".into()))?;

        if let Some(base_url) = &self.base_url {
            check_base_url(base_url)?;
        }

        let mut http = HttpClient::builder();
        if let Some(timeout) = self.timeout {
            http = http.timeout(timeout);
        }
        let http = http
            .build()
            .map_err(|err| ChatError::Invalid(format!("building HTTP client: {err}")))?;

        let client = OpenAiClient::with_http(api_key, http, self.base_url)?;

        Ok(OpenAiAdapter {
            client: Arc::new(client),
        })
    }
}

fn check_base_url(base_url: &str) -> Result<()> {
    let url = Url::parse(base_url)
        .map_err(|err| ChatError::Invalid(format!("base URL `{base_url}`: {err}")))?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(ChatError::Invalid(format!(
            "base URL `{base_url}`: unsupported scheme `{other}`"
        ))),
    }
}
