//! # Connector Layer
//!
//! External integrations implementing application ports:
//! - LLM providers (OpenAI, Anthropic, offline mock) behind [`crate::application::ChatClient`]
//! - The HTTP API and static site served with axum

pub mod adapter;
pub mod api;

pub use adapter::*;
