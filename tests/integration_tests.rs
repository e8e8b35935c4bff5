//! Integration tests for AskTerm.
//!
//! These tests wire the pipeline through the container the way the binary
//! does, using the offline mock client.

use std::io::Write;
use std::sync::Arc;

use askterm::{
    AskQuestionUseCase, Container, ContainerConfig, DomainError, LlmSettings, MockChatClient,
    TopicDataset,
};

fn mock_config() -> ContainerConfig {
    ContainerConfig {
        mock_llm: true,
        ..ContainerConfig::default()
    }
}

#[tokio::test]
async fn test_mock_pipeline_routes_to_mentioned_topic() {
    let container = Container::new(mock_config()).expect("Failed to build container");
    let use_case = container.ask_use_case();

    let outcome = use_case
        .execute("What projects has he built with golang?")
        .await
        .expect("Pipeline failed");

    assert_eq!(outcome.topic(), "golang");
    assert!(outcome.content().contains(">golang</h2>"));
    assert!(outcome.content().contains("crt-spawn"));
}

#[tokio::test]
async fn test_mock_pipeline_defaults_to_first_topic() {
    let container = Container::new(mock_config()).expect("Failed to build container");

    let outcome = container
        .ask_use_case()
        .execute("hello?")
        .await
        .expect("Pipeline failed");

    assert_eq!(outcome.topic(), "javascript");
}

#[tokio::test]
async fn test_blank_query_is_rejected() {
    let container = Container::new(mock_config()).expect("Failed to build container");

    let result = container.ask_use_case().execute("   ").await;
    assert!(matches!(result, Err(DomainError::EmptyQuery)));
}

#[tokio::test]
async fn test_custom_dataset_file_replaces_builtin_topics() {
    let mut file = tempfile::NamedTempFile::new().expect("Failed to create dataset file");
    write!(
        file,
        r#"[
            {{"name": "rust", "content": "Ownership, borrowing and lifetimes."}},
            {{"name": "wasm", "content": "Portable bytecode for the web."}}
        ]"#
    )
    .unwrap();

    let container = Container::new(ContainerConfig {
        dataset: Some(file.path().to_path_buf()),
        ..mock_config()
    })
    .expect("Failed to build container");
    let use_case = container.ask_use_case();

    assert_eq!(use_case.topics().names(), vec!["rust", "wasm"]);

    let outcome = use_case.execute("compile rust to WASM").await.unwrap();
    assert_eq!(outcome.topic(), "rust");
}

#[tokio::test]
async fn test_settings_are_exposed_unchanged() {
    let settings = LlmSettings::new()
        .with_small_model("tiny")
        .with_big_model("huge")
        .with_temperature(0.2);
    let use_case = AskQuestionUseCase::new(
        Arc::new(MockChatClient::new()),
        Arc::new(TopicDataset::builtin()),
        settings.clone(),
    );

    assert_eq!(use_case.settings(), &settings);
    assert!(use_case.execute("blog").await.is_ok());
}
