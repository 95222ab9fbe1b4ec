//! Compose Routes - Build system prompts for a flow host
//!
//! The host posts the component's inputs and gets back the prompt text and
//! the status line it would show on the node.

use autoprompt::{AutoSystemPrompt, Component, ComponentInfo, DomainError};
use axum::{
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use crate::models::{ComposeRequest, ComposeResponse, OptionsResponse};
use crate::AppState;

/// Compose a system prompt
///
/// POST /autoprompt/compose
#[utoipa::path(
    post,
    path = "/autoprompt/compose",
    request_body = ComposeRequest,
    responses(
        (status = 200, description = "Composed prompt", body = ComposeResponse),
        (status = 400, description = "Unknown tone or model family"),
        (status = 401, description = "Missing or invalid API key")
    ),
    tag = "Compose"
)]
pub async fn compose_prompt(
    Json(body): Json<ComposeRequest>,
) -> Result<Json<ComposeResponse>, (StatusCode, String)> {
    let request = body.into_domain().map_err(domain_error)?;

    let mut component = AutoSystemPrompt::with_inputs(request.clone());
    let message = component.run().await.map_err(domain_error)?;
    let status = component.status().unwrap_or_default().to_string();

    tracing::info!(
        "Composed prompt ({} / {}): {}",
        request.tone,
        request.target_model_family,
        status
    );

    Ok(Json(ComposeResponse::new(&request, message, status)))
}

/// List tone and model family options
///
/// GET /autoprompt/options
#[utoipa::path(
    get,
    path = "/autoprompt/options",
    responses(
        (status = 200, description = "Available options", body = OptionsResponse)
    ),
    tag = "Compose"
)]
pub async fn list_options() -> Json<OptionsResponse> {
    Json(OptionsResponse::default())
}

/// Describe the component's inputs and output
///
/// GET /autoprompt/component
#[utoipa::path(
    get,
    path = "/autoprompt/component",
    responses(
        (status = 200, description = "Component declaration", body = ComponentInfo)
    ),
    tag = "Compose"
)]
pub async fn component_info() -> Json<ComponentInfo> {
    Json(AutoSystemPrompt::component_info())
}

fn domain_error(e: DomainError) -> (StatusCode, String) {
    tracing::warn!("Rejected compose request: {}", e);
    (StatusCode::BAD_REQUEST, e.to_string())
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/autoprompt/compose", post(compose_prompt))
        .route("/autoprompt/options", get(list_options))
        .route("/autoprompt/component", get(component_info))
}
