//! Axum app: state, router, and request handlers.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{error, info};
use uuid::Uuid;

use crate::composer::{
    compose_generation_prompt, compose_rewrite_prompt, parse_variations, GenerateInput,
    RewriteInput,
};
use crate::gateway::GenerationGateway;

use super::error::ApiError;

const GENERATE_FAILED: &str = "Failed to generate message";
const REWRITE_FAILED: &str = "Failed to rewrite message";

/// Shared state for request handlers. Read-only after startup.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Gateway every request goes through.
    pub gateway: GenerationGateway,
}

/// Successful response body for both endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationOutput {
    /// Raw model text.
    pub output: String,
    /// `output` split on its variation/version markers.
    pub variations: Vec<String>,
}

impl GenerationOutput {
    fn new(output: String) -> Self {
        let variations = parse_variations(&output);
        Self { output, variations }
    }
}

/// Builds the router with its API routes.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/generate", post(generate_handler))
        .route("/api/rewrite", post(rewrite_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}

#[tracing::instrument(skip_all, fields(request_id = %Uuid::new_v4()))]
async fn generate_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<GenerateInput>, JsonRejection>,
) -> Result<Json<GenerationOutput>, ApiError> {
    let Json(input) = payload?;
    let request = input.validate().inspect_err(|e| info!(error = %e, "rejected"))?;

    let prompt = compose_generation_prompt(&request);
    info!(
        category = %request.category,
        stage = %request.relationship_stage,
        prompt_chars = prompt.len(),
        "generating"
    );

    let output = state.gateway.generate(&prompt).await.map_err(|e| {
        error!(error = %e, "generation failed");
        ApiError::Upstream(GENERATE_FAILED)
    })?;
    Ok(Json(GenerationOutput::new(output)))
}

#[tracing::instrument(skip_all, fields(request_id = %Uuid::new_v4()))]
async fn rewrite_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<RewriteInput>, JsonRejection>,
) -> Result<Json<GenerationOutput>, ApiError> {
    let Json(input) = payload?;
    let request = input.validate().inspect_err(|e| info!(error = %e, "rejected"))?;

    let prompt = compose_rewrite_prompt(&request);
    info!(
        fixes = request.fix_selections.len(),
        prompt_chars = prompt.len(),
        "rewriting"
    );

    let output = state.gateway.generate(&prompt).await.map_err(|e| {
        error!(error = %e, "rewrite failed");
        ApiError::Upstream(REWRITE_FAILED)
    })?;
    Ok(Json(GenerationOutput::new(output)))
}

async fn health_handler(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "model": state.gateway.model_id(),
    }))
}
