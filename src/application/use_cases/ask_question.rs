use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info, warn};

use crate::application::prompts::{build_classification_prompt, build_generation_prompt};
use crate::application::ChatClient;
use crate::domain::{CompletionRequest, DomainError, LlmSettings, TopicDataset};

/// Classification runs greedy so the same query always maps to the same topic.
const CLASSIFICATION_TEMPERATURE: f32 = 0.0;

/// Result of a successful ask: the routed topic and the generated fragment.
#[derive(Debug, Clone, PartialEq)]
pub struct AskOutcome {
    topic: String,
    content: String,
}

impl AskOutcome {
    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn into_content(self) -> String {
        self.content
    }
}

/// Two-stage pipeline: classify the query into a known topic, then generate
/// an HTML fragment from that topic's content. Each stage runs once; any
/// failure ends the request without partial output.
pub struct AskQuestionUseCase {
    chat_client: Arc<dyn ChatClient>,
    topics: Arc<TopicDataset>,
    settings: LlmSettings,
}

impl AskQuestionUseCase {
    pub fn new(
        chat_client: Arc<dyn ChatClient>,
        topics: Arc<TopicDataset>,
        settings: LlmSettings,
    ) -> Self {
        Self {
            chat_client,
            topics,
            settings,
        }
    }

    pub fn topics(&self) -> &TopicDataset {
        &self.topics
    }

    pub fn settings(&self) -> &LlmSettings {
        &self.settings
    }

    pub async fn execute(&self, query: &str) -> Result<AskOutcome, DomainError> {
        if query.trim().is_empty() {
            return Err(DomainError::EmptyQuery);
        }

        let start_time = Instant::now();

        info!("Step 1: identifying topic with {}", self.settings.small_model());
        let topic = self.classify(query).await?;
        info!("Identified topic: {topic}");

        let Some(entry) = self.topics.get(&topic) else {
            warn!("Invalid topic identified: \"{topic}\"");
            return Err(DomainError::InvalidTopic(topic));
        };

        info!("Step 2: generating content with {}", self.settings.big_model());
        let topic_data = entry.to_prompt_json()?;
        let content = self.generate(entry.name(), &topic_data, query).await?;

        info!(
            "Content generated for topic {} in {:.2}s",
            entry.name(),
            start_time.elapsed().as_secs_f64()
        );

        Ok(AskOutcome { topic, content })
    }

    async fn classify(&self, query: &str) -> Result<String, DomainError> {
        let prompt = build_classification_prompt(query, &self.topics.names());
        debug!("Classification prompt: {prompt}");

        let request = CompletionRequest::new(
            self.settings.small_model(),
            prompt,
            self.settings.small_max_tokens(),
            CLASSIFICATION_TEMPERATURE,
        );

        let response = self
            .chat_client
            .complete(&request)
            .await
            .map_err(|e| DomainError::ClassifyFailed(e.to_string()))?;

        Ok(response.trim().to_string())
    }

    async fn generate(
        &self,
        topic: &str,
        topic_data: &str,
        query: &str,
    ) -> Result<String, DomainError> {
        let prompt = build_generation_prompt(topic, topic_data, query);
        debug!("Generation prompt: {prompt}");

        let request = CompletionRequest::new(
            self.settings.big_model(),
            prompt,
            self.settings.big_max_tokens(),
            self.settings.temperature(),
        );

        self.chat_client
            .complete(&request)
            .await
            .map_err(|e| DomainError::GenerateFailed(e.to_string()))
    }
}
