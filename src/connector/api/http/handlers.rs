use std::sync::Arc;

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::response::Html;
use tracing::{error, info, warn};

use super::error::ApiError;
use super::request_context::RequestContext;
use crate::connector::api::Container;
use crate::domain::DomainError;

/// Query string of `/api/ask`. Repeated `query` keys keep the first value.
#[derive(Debug, Default)]
pub struct AskParams {
    pub query: Option<String>,
}

impl AskParams {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let query = pairs
            .into_iter()
            .find_map(|(key, value)| (key == "query").then_some(value));
        Self { query }
    }
}

/// `GET /api`: sanity check.
pub async fn hello() -> &'static str {
    "Hello World"
}

/// `GET /api/ask?query=...`: classify the query, generate the fragment and
/// return it as-is.
pub async fn ask(
    State(container): State<Arc<Container>>,
    context: RequestContext,
    params: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Html<String>, ApiError> {
    // An unparseable query string counts as no query, so it gets the same
    // JSON error as a missing one.
    let params = match params {
        Ok(Query(pairs)) => AskParams::from_pairs(pairs),
        Err(rejection) => {
            warn!(
                request_id = %context.request_id,
                ip = %context.remote_addr_display(),
                "Unreadable query string: {rejection}"
            );
            AskParams::default()
        }
    };
    let query = params.query.unwrap_or_default();

    info!(
        request_id = %context.request_id,
        ip = %context.remote_addr_display(),
        user_agent = context.user_agent_display(),
        query = %query,
        "Request received"
    );

    match container.ask_use_case().execute(&query).await {
        Ok(outcome) => {
            info!(
                request_id = %context.request_id,
                topic = outcome.topic(),
                "Sending generated content"
            );
            Ok(Html(outcome.into_content()))
        }
        Err(err) => {
            log_failure(&context, &query, &err);
            Err(ApiError(err))
        }
    }
}

fn log_failure(context: &RequestContext, query: &str, err: &DomainError) {
    if err.is_client_error() {
        warn!(
            request_id = %context.request_id,
            ip = %context.remote_addr_display(),
            user_agent = context.user_agent_display(),
            query = %query,
            "Rejected query: {err}"
        );
    } else {
        error!(
            request_id = %context.request_id,
            ip = %context.remote_addr_display(),
            user_agent = context.user_agent_display(),
            query = %query,
            "Ask pipeline failed: {err}"
        );
    }
}
