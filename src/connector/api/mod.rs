pub mod container;
pub mod controller;
pub mod http;
pub mod router;

pub use container::{Container, ContainerConfig, LlmProvider, DEFAULT_TIMEOUT_SECS};
pub use http::{build_router, serve};
pub use router::Router;
