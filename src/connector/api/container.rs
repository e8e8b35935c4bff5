use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::application::{AskQuestionUseCase, ChatClient};
use crate::connector::adapter::{
    AnthropicClient, MockChatClient, OpenAiClient, DEFAULT_ANTHROPIC_BASE_URL,
    DEFAULT_OPENAI_BASE_URL,
};
use crate::domain::{LlmSettings, TopicDataset};

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum LlmProvider {
    #[default]
    Openai,
    Anthropic,
}

impl LlmProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Openai => "openai",
            Self::Anthropic => "anthropic",
        }
    }

    fn default_base_url(&self) -> &'static str {
        match self {
            Self::Openai => DEFAULT_OPENAI_BASE_URL,
            Self::Anthropic => DEFAULT_ANTHROPIC_BASE_URL,
        }
    }
}

pub struct ContainerConfig {
    pub provider: LlmProvider,
    /// Provider credential; empty when the endpoint needs none.
    pub api_key: String,
    /// Overrides the provider's public endpoint.
    pub base_url: Option<String>,
    /// Per-call I/O timeout for provider requests. No retries are made.
    pub timeout: Duration,
    /// Use the offline [`MockChatClient`] instead of a real provider.
    pub mock_llm: bool,
    /// JSON dataset file; the built-in topics are used when absent.
    pub dataset: Option<PathBuf>,
    pub settings: LlmSettings,
}

impl Default for ContainerConfig {
    fn default() -> Self {
        Self {
            provider: LlmProvider::default(),
            api_key: String::new(),
            base_url: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            mock_llm: false,
            dataset: None,
            settings: LlmSettings::default(),
        }
    }
}

/// Wires the ask pipeline from configuration. Built once at start-up and
/// shared read-only by every request.
pub struct Container {
    ask_use_case: Arc<AskQuestionUseCase>,
    provider_name: String,
}

impl Container {
    pub fn new(config: ContainerConfig) -> Result<Self> {
        let topics = match config.dataset.as_deref() {
            Some(path) => {
                debug!("Loading topic dataset from {}", path.display());
                TopicDataset::from_json_file(path)
                    .with_context(|| format!("failed to load dataset {}", path.display()))?
            }
            None => TopicDataset::builtin(),
        };
        info!("Loaded {} topics: {}", topics.len(), topics.names().join(", "));

        let chat_client: Arc<dyn ChatClient> = if config.mock_llm {
            debug!("Using mock chat client");
            Arc::new(MockChatClient::new())
        } else {
            let base_url = config
                .base_url
                .clone()
                .unwrap_or_else(|| config.provider.default_base_url().to_string());
            debug!(
                "Using {} provider at {} (timeout {:?})",
                config.provider.as_str(),
                base_url,
                config.timeout
            );
            match config.provider {
                LlmProvider::Openai => Arc::new(OpenAiClient::new(
                    config.api_key.clone(),
                    base_url,
                    config.timeout,
                )),
                LlmProvider::Anthropic => Arc::new(AnthropicClient::new(
                    config.api_key.clone(),
                    base_url,
                    config.timeout,
                )),
            }
        };

        Ok(Self::with_chat_client(chat_client, topics, config.settings))
    }

    /// Build around an existing client, bypassing provider selection.
    pub fn with_chat_client(
        chat_client: Arc<dyn ChatClient>,
        topics: TopicDataset,
        settings: LlmSettings,
    ) -> Self {
        let provider_name = chat_client.provider_name().to_string();
        let ask_use_case = Arc::new(AskQuestionUseCase::new(
            chat_client,
            Arc::new(topics),
            settings,
        ));
        Self {
            ask_use_case,
            provider_name,
        }
    }

    pub fn ask_use_case(&self) -> Arc<AskQuestionUseCase> {
        self.ask_use_case.clone()
    }

    pub fn provider_name(&self) -> &str {
        &self.provider_name
    }
}
