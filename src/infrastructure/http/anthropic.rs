//! Anthropic Messages API client.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::info;
use url::Url;

use super::{describe_failure, endpoint, transport_failure};
use crate::config::Config;
use crate::domain::entities::TarotDraw;
use crate::domain::prompt::build_fortune_prompt;
use crate::domain::providers::NarrativeGenerator;
use crate::error::{DrawError, Upstream};

/// API version sent in the `anthropic-version` header.
pub const ANTHROPIC_VERSION: &str = "2023-06-01";

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: [Message<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type", default)]
    kind: String,
    #[serde(default)]
    text: Option<String>,
}

impl MessagesResponse {
    /// Text of the first `text` content block, if it holds anything.
    fn into_text(self) -> Option<String> {
        self.content
            .into_iter()
            .find(|block| block.kind == "text")
            .and_then(|block| block.text)
            .filter(|text| !text.trim().is_empty())
    }
}

/// [`NarrativeGenerator`] backed by the Anthropic Messages API.
pub struct AnthropicClient {
    http: reqwest::Client,
    messages_url: Url,
    api_key: String,
    model: String,
    max_tokens: u32,
    language: String,
}

impl AnthropicClient {
    pub fn new(
        http: reqwest::Client,
        messages_url: Url,
        api_key: String,
        model: String,
        max_tokens: u32,
        language: String,
    ) -> Self {
        Self {
            http,
            messages_url,
            api_key,
            model,
            max_tokens,
            language,
        }
    }

    /// Creates a client from the service configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if `ANTHROPIC_BASE_URL` is not a valid URL.
    pub fn from_config(http: reqwest::Client, config: &Config) -> anyhow::Result<Self> {
        Ok(Self::new(
            http,
            endpoint(&config.anthropic_base_url, "v1/messages")?,
            config.anthropic_api_key.clone(),
            config.anthropic_model.clone(),
            config.anthropic_max_tokens,
            config.fortune_language.clone(),
        ))
    }
}

#[async_trait]
impl NarrativeGenerator for AnthropicClient {
    async fn narrate(&self, draw: &TarotDraw) -> Result<String, DrawError> {
        let prompt = build_fortune_prompt(draw, &self.language);
        let request = MessagesRequest {
            model: &self.model,
            max_tokens: self.max_tokens,
            messages: [Message {
                role: "user",
                content: &prompt,
            }],
        };

        let response = self
            .http
            .post(self.messages_url.clone())
            .header("x-api-key", self.api_key.as_str())
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&request)
            .send()
            .await
            .map_err(|e| DrawError::upstream(Upstream::TextGeneration, transport_failure(e)))?;

        info!(status = %response.status(), "Text generation response");

        if !response.status().is_success() {
            let reason = describe_failure("text generation", response).await;
            return Err(DrawError::upstream(Upstream::TextGeneration, reason));
        }

        let body: MessagesResponse = response.json().await.map_err(|e| {
            DrawError::upstream(
                Upstream::TextGeneration,
                format!("invalid response body: {}", transport_failure(e)),
            )
        })?;

        body.into_text().ok_or(DrawError::EmptyGeneration)
    }

    fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }
}
