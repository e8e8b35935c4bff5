use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::warn;

use crate::application::ChatClient;
use crate::domain::{CompletionRequest, DomainError};

pub const DEFAULT_ANTHROPIC_BASE_URL: &str = "https://api.anthropic.com";
const MESSAGES_PATH: &str = "/v1/messages";
const ANTHROPIC_API_VERSION: &str = "2023-06-01";

#[derive(serde::Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    temperature: f32,
    messages: Vec<ApiMessage<'a>>,
}

#[derive(serde::Serialize)]
struct ApiMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ApiResponse {
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: Option<String>,
}

/// HTTP client for the Anthropic Messages API (and compatible endpoints such as
/// LM Studio).
///
/// Selected with `LLM_PROVIDER=anthropic`. Model names come from the pipeline
/// settings, so `SMALL_PROMPT_MODEL` / `BIG_PROMPT_MODEL` must name Claude models
/// (e.g. `claude-haiku-4-5`) when this provider is active.
pub struct AnthropicClient {
    client: reqwest::Client,
    api_key: String,
    /// Full endpoint URL (base + MESSAGES_PATH).
    url: String,
}

impl AnthropicClient {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>, timeout: Duration) -> Self {
        let base: String = base_url.into();
        let url = format!("{}{}", base.trim_end_matches('/'), MESSAGES_PATH);
        Self {
            client: reqwest::Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_default(),
            api_key: api_key.into(),
            url,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl ChatClient for AnthropicClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, DomainError> {
        let body = ApiRequest {
            model: request.model(),
            max_tokens: request.max_tokens(),
            temperature: request.temperature(),
            messages: vec![ApiMessage {
                role: "user",
                content: request.prompt(),
            }],
        };

        let response = self
            .client
            .post(&self.url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_API_VERSION)
            .json(&body)
            .send()
            .await
            .map_err(|e| DomainError::completion(format!("AnthropicClient: request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!("AnthropicClient: API returned {status}: {body}");
            return Err(DomainError::completion(format!(
                "AnthropicClient: API returned {status}"
            )));
        }

        let api_response: ApiResponse = response.json().await.map_err(|e| {
            DomainError::completion(format!("AnthropicClient: failed to parse response: {e}"))
        })?;

        api_response
            .content
            .into_iter()
            .find_map(|b| b.text)
            .ok_or_else(|| {
                DomainError::completion("AnthropicClient: response contained no text block")
            })
    }

    fn provider_name(&self) -> &str {
        "anthropic"
    }
}
