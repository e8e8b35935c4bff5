mod completion;
mod llm_settings;
mod topic;

pub use completion::*;
pub use llm_settings::*;
pub use topic::*;
