pub mod ask_controller;
pub mod topics_controller;

pub use ask_controller::AskController;
pub use topics_controller::TopicsController;
