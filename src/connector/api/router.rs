use anyhow::Result;

use crate::cli::Commands;

use super::container::Container;
use super::controller::{AskController, TopicsController};

/// Dispatches one-shot CLI commands to their controllers.
pub struct Router<'a> {
    ask_controller: AskController<'a>,
    topics_controller: TopicsController<'a>,
}

impl<'a> Router<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self {
            ask_controller: AskController::new(container),
            topics_controller: TopicsController::new(container),
        }
    }

    pub async fn route(&self, command: Commands) -> Result<String> {
        match command {
            Commands::Ask { query } => self.ask_controller.ask(query).await,
            Commands::Topics => self.topics_controller.list().await,
            Commands::Serve { .. } => unreachable!("serve command is handled separately in main"),
        }
    }
}
