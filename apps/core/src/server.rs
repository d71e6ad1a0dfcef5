//! HTTP surface for the engine.
//!
//! Thin plumbing: handlers validate input, resolve settings into plain
//! values, call the pure engine functions, and serialize the result. All
//! domain behavior lives in `engine` and `pricing`.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use uuid::Uuid;
use validator::Validate;

use crate::ai::PromptRewriter;
use crate::config::Settings;
use crate::engine::{scaffold, ModeChoice, OutputFormat, PromptEnhancer};
use crate::error::AppError;
use crate::models::{HealthResponse, ModelInfo, OptimizeRequest, OptimizeResponse};
use crate::pricing;

/// Shared handler state: the engine, resolved settings, and the optional
/// external rewriter.
pub struct AppState {
    pub enhancer: PromptEnhancer,
    pub settings: Settings,
    pub rewriter: Option<Arc<dyn PromptRewriter>>,
}

/// Build the application router. Method routing yields 405 for non-POST
/// calls on the optimize route.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/optimize", post(optimize))
        .route("/api/models", get(list_models))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Validation(_) | AppError::UnknownModel(_) => StatusCode::BAD_REQUEST,
            AppError::Config(_)
            | AppError::Io(_)
            | AppError::Upstream(_)
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

async fn optimize(
    State(state): State<Arc<AppState>>,
    Json(request): Json<OptimizeRequest>,
) -> Result<Json<OptimizeResponse>, AppError> {
    let request_id = Uuid::new_v4();

    request.validate()?;
    if request.prompt.trim().is_empty() {
        return Err(AppError::Validation("prompt must not be empty".to_string()));
    }

    // Resolve the model before doing any work: unknown ids fail fast.
    let model = request
        .model
        .as_deref()
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .unwrap_or(&state.settings.default_model)
        .to_string();
    pricing::lookup(&model)?;

    let choice = ModeChoice::parse(&request.mode);
    let format = OutputFormat::parse(request.format.as_deref().unwrap_or(""));
    let role = request.role.as_deref();

    let report = state.enhancer.run(&request.prompt, choice, format, role);

    // Optional external AI path: explicit branching with the rule-based
    // output already in hand as the fallback.
    let optimized = match &state.rewriter {
        Some(rewriter) if state.settings.ai_available() => {
            let resolved_role = match role.map(str::trim).filter(|r| !r.is_empty()) {
                Some(role) => scaffold::resolve_role(role),
                None => scaffold::resolve_role(scaffold::suggest_skill(&request.prompt)),
            };
            match rewriter.rewrite(&request.prompt, &resolved_role, format).await {
                Ok(text) => text,
                Err(err) => {
                    warn!(
                        %request_id,
                        error = %err,
                        "external enhancement failed, using rule-based output"
                    );
                    report.optimized.clone()
                }
            }
        }
        _ => report.optimized.clone(),
    };

    let estimate = pricing::estimate(&optimized, &model)?;

    info!(
        %request_id,
        model = %model,
        mode = %report.mode_used,
        tokens = estimate.tokens,
        elapsed_ms = report.processing_time_ms,
        "prompt optimized"
    );

    Ok(Json(OptimizeResponse {
        optimized,
        tokens: estimate.tokens,
        cost: estimate.cost_string(),
        mode_used: report.mode_used,
    }))
}

async fn list_models() -> Json<Vec<ModelInfo>> {
    let catalog = pricing::models()
        .iter()
        .map(|profile| ModelInfo {
            id: profile.id.to_string(),
            name: profile.display_name.to_string(),
            provider: profile.provider,
            price_per_input_token: profile.price_per_input_token,
        })
        .collect();
    Json(catalog)
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        service: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
