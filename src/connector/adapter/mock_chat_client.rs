use async_trait::async_trait;
use tracing::debug;

use crate::application::prompts::CLASSIFICATION_HEADER;
use crate::application::ChatClient;
use crate::domain::{CompletionRequest, DomainError};

const KNOWN_TOPICS_MARKER: &str = "Known topics: ";
const USER_QUERY_MARKER: &str = "User query: \"";
const TOPIC_MARKER: &str = "topic identified: \"";

/// Offline stand-in for a real provider, enabled with `--mock-llm`.
///
/// The stage is read from the prompt header, never from user text.
/// Classification picks the first listed topic mentioned in the query (or the
/// first topic when none is); generation echoes the topic in a terminal-styled
/// block. Output depends only on the prompt.
pub struct MockChatClient;

impl MockChatClient {
    pub fn new() -> Self {
        Self
    }

    fn classify(prompt: &str) -> String {
        let topics: Vec<&str> = line_after(prompt, KNOWN_TOPICS_MARKER)
            .map(|line| line.split(", ").filter(|t| !t.is_empty()).collect())
            .unwrap_or_default();
        let query = line_after(prompt, USER_QUERY_MARKER)
            .unwrap_or_default()
            .to_lowercase();

        topics
            .iter()
            .find(|t| query.contains(&t.to_lowercase()))
            .or_else(|| topics.first())
            .map(|t| t.to_string())
            .unwrap_or_default()
    }

    fn generate(prompt: &str) -> String {
        let topic = line_after(prompt, TOPIC_MARKER)
            .and_then(|rest| rest.split('"').next())
            .unwrap_or("unknown");

        format!(
            "<div class=\"p-4 border border-green-500 text-green-500 bg-black font-mono mt-6 mb-6 \
             shadow-[0_0_10px_2px_rgba(0,255,0,0.5)] crt-spawn\">\n    \
             <h2 class=\"text-xl font-bold mb-2\">{topic}</h2>\n    \
             <p>Source: <span class=\"font-bold\">mock provider</span></p>\n\
             </div>"
        )
    }
}

impl Default for MockChatClient {
    fn default() -> Self {
        Self::new()
    }
}

fn line_after<'a>(text: &'a str, marker: &str) -> Option<&'a str> {
    let start = text.find(marker)? + marker.len();
    text[start..].lines().next()
}

#[async_trait]
impl ChatClient for MockChatClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, DomainError> {
        let prompt = request.prompt();
        let text = if prompt.trim_start().starts_with(CLASSIFICATION_HEADER) {
            Self::classify(prompt)
        } else {
            Self::generate(prompt)
        };
        debug!("MockChatClient: {} -> {} bytes", request.model(), text.len());
        Ok(text)
    }

    fn provider_name(&self) -> &str {
        "mock"
    }
}
