pub mod application;
pub mod cli;
pub mod connector;
pub mod domain;

pub use application::{AskOutcome, AskQuestionUseCase, ChatClient};

pub use connector::{AnthropicClient, MockChatClient, OpenAiClient};

pub use connector::api::{build_router, Container, ContainerConfig, LlmProvider};

pub use domain::{CompletionRequest, DomainError, LlmSettings, Topic, TopicDataset};
