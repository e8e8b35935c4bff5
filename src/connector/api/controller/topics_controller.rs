use anyhow::Result;

use crate::domain::TopicDataset;

use super::super::Container;

pub struct TopicsController<'a> {
    container: &'a Container,
}

impl<'a> TopicsController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn list(&self) -> Result<String> {
        let use_case = self.container.ask_use_case();
        Ok(self.format_topics(use_case.topics()))
    }

    fn format_topics(&self, topics: &TopicDataset) -> String {
        let mut output = format!("Known topics ({}):\n\n", topics.len());
        for (i, topic) in topics.iter().enumerate() {
            let preview: String = topic
                .content()
                .lines()
                .next()
                .unwrap_or_default()
                .chars()
                .take(72)
                .collect();
            output.push_str(&format!("{}. {}\n   | {}\n", i + 1, topic.name(), preview));
        }
        output
    }
}
