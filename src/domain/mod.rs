//! # Domain Layer
//!
//! Topics, model settings and the error taxonomy of the ask pipeline.
//! This layer is independent of external frameworks and infrastructure.

mod error;
pub mod models;

pub use error::*;
pub use models::*;
