//! # Application Layer
//!
//! Prompt construction and the two-stage ask pipeline, written against the
//! [`ChatClient`] port so connectors can be swapped.

pub mod interfaces;
pub mod prompts;
pub mod use_cases;

pub use interfaces::*;
pub use use_cases::*;
