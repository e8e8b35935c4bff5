use std::convert::Infallible;
use std::net::SocketAddr;

use axum::extract::{ConnectInfo, FromRequestParts};
use axum::http::header::USER_AGENT;
use axum::http::request::Parts;
use uuid::Uuid;

/// Who sent a request, captured for log lines. Never rejects: fields the
/// transport did not provide are left empty.
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub request_id: Uuid,
    pub remote_addr: Option<SocketAddr>,
    pub user_agent: Option<String>,
}

impl RequestContext {
    pub fn remote_addr_display(&self) -> String {
        self.remote_addr
            .map(|addr| addr.ip().to_string())
            .unwrap_or_else(|| "unknown".to_string())
    }

    pub fn user_agent_display(&self) -> &str {
        self.user_agent.as_deref().unwrap_or("unknown")
    }
}

impl<S> FromRequestParts<S> for RequestContext
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let remote_addr = parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| *addr);
        let user_agent = parts
            .headers
            .get(USER_AGENT)
            .and_then(|v| v.to_str().ok())
            .map(String::from);

        Ok(Self {
            request_id: Uuid::new_v4(),
            remote_addr,
            user_agent,
        })
    }
}
