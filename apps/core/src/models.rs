use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::engine::Mode;
use crate::pricing::Provider;

/// Request body for the optimize endpoint.
#[derive(Debug, Serialize, Deserialize, Clone, Validate)]
pub struct OptimizeRequest {
    /// The raw prompt to rewrite. Must be non-empty after trimming.
    #[validate(length(min = 1))]
    pub prompt: String,
    /// Target model id; must resolve in the price table. Falls back to the
    /// configured default model when omitted.
    #[serde(default)]
    pub model: Option<String>,
    /// One of "strict", "balanced", "creative", or "recommended".
    /// Unknown values degrade to "balanced".
    #[serde(default = "default_mode")]
    pub mode: String,
    /// One of "plain", "json", "markdown", "code". Unknown values degrade
    /// to "plain".
    #[serde(default)]
    pub format: Option<String>,
    /// A skill id from the registry, or a free-form role title.
    #[serde(default)]
    pub role: Option<String>,
}

fn default_mode() -> String {
    "recommended".to_string()
}

/// Response body for a successful optimization.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct OptimizeResponse {
    /// The fully scaffolded prompt.
    pub optimized: String,
    /// Estimated input token count for the optimized prompt.
    pub tokens: usize,
    /// Estimated USD cost, fixed-point with six decimal places.
    pub cost: String,
    /// The mode actually applied after resolving "recommended".
    pub mode_used: Mode,
}

/// One entry in the model catalog listing.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ModelInfo {
    /// The identifier callers pass as `model`.
    pub id: String,
    /// Display name for UIs.
    pub name: String,
    /// Provider family, which also decides the token counting strategy.
    pub provider: Provider,
    /// USD per input token.
    pub price_per_input_token: f64,
}

/// Liveness payload for the health endpoint.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct HealthResponse {
    pub service: String,
    pub version: String,
}
