use anyhow::Result;

use super::super::Container;

pub struct AskController<'a> {
    container: &'a Container,
}

impl<'a> AskController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn ask(&self, query: String) -> Result<String> {
        let use_case = self.container.ask_use_case();
        let outcome = use_case.execute(&query).await?;
        tracing::debug!("Answered from topic {}", outcome.topic());
        Ok(outcome.into_content())
    }
}
