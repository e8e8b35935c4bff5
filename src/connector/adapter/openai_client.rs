use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::application::ChatClient;
use crate::domain::{CompletionRequest, DomainError};

pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com";
const CHAT_COMPLETIONS_PATH: &str = "/v1/chat/completions";

#[derive(Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    messages: Vec<ApiMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Serialize)]
struct ApiMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ApiResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// HTTP client for the OpenAI Chat Completions API and compatible servers.
///
/// Each prompt is sent as a single `user` message. The base URL can point at
/// any server speaking the same protocol (a local proxy, vLLM, LM Studio).
pub struct OpenAiClient {
    client: reqwest::Client,
    api_key: String,
    /// Full endpoint URL (base + CHAT_COMPLETIONS_PATH).
    url: String,
}

impl OpenAiClient {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>, timeout: Duration) -> Self {
        let base: String = base_url.into();
        let url = format!("{}{}", base.trim_end_matches('/'), CHAT_COMPLETIONS_PATH);
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
impl ChatClient for OpenAiClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, DomainError> {
        let body = ApiRequest {
            model: request.model(),
            messages: vec![ApiMessage {
                role: "user",
                content: request.prompt(),
            }],
            max_tokens: request.max_tokens(),
            temperature: request.temperature(),
        };

        let mut http_request = self.client.post(&self.url).json(&body);
        if !self.api_key.is_empty() {
            http_request = http_request.bearer_auth(&self.api_key);
        }

        let response = http_request.send().await.map_err(|e| {
            DomainError::completion(format!(
                "OpenAiClient: request with model {} failed: {e}",
                request.model()
            ))
        })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!("OpenAiClient: API returned {status} for model {}: {body}", request.model());
            return Err(DomainError::completion(format!(
                "OpenAiClient: API returned {status}"
            )));
        }

        let api_response: ApiResponse = response.json().await.map_err(|e| {
            DomainError::completion(format!("OpenAiClient: failed to parse response: {e}"))
        })?;

        let text = api_response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| {
                DomainError::completion("OpenAiClient: response contained no message")
            })?;

        debug!("OpenAiClient: {} returned {} bytes", request.model(), text.len());
        Ok(text)
    }

    fn provider_name(&self) -> &str {
        "openai"
    }
}
