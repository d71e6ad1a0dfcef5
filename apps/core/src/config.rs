//! Runtime settings resolved from the environment.
//!
//! The engine itself never reads settings; everything is resolved here at
//! startup and passed down as plain values. `.env` files are honored via
//! `dotenv` in `main`.

use std::env;
use url::Url;

use crate::error::AppError;
use crate::pricing;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8090";
const DEFAULT_MODEL: &str = "gemma-3-12b";
const DEFAULT_AI_ENDPOINT: &str = "https://openrouter.ai/api/v1/chat/completions";
const DEFAULT_AI_MODEL: &str = "google/gemma-3-12b-it";

/// Settings for the optional external AI enhancement path.
#[derive(Debug, Clone)]
pub struct AiSettings {
    /// Feature toggle; off by default.
    pub enabled: bool,
    /// OpenRouter API key. Required when the path is enabled.
    pub api_key: Option<String>,
    /// Chat completions endpoint.
    pub endpoint: Url,
    /// Upstream model identifier sent to the API.
    pub model: String,
}

/// Process-wide settings, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Address the HTTP server binds to.
    pub bind_addr: String,
    /// Model id used when a request does not specify one.
    pub default_model: String,
    pub ai: AiSettings,
}

impl Settings {
    /// Load settings from environment variables, applying defaults.
    ///
    /// Fails fast on a default model missing from the price table, a
    /// malformed endpoint URL, or an enabled AI path without an API key.
    pub fn from_env() -> Result<Self, AppError> {
        let bind_addr = env::var("PROMPTFORGE_BIND_ADDR")
            .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

        let default_model = env::var("PROMPTFORGE_DEFAULT_MODEL")
            .unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        pricing::lookup(&default_model).map_err(|_| {
            AppError::Config(format!(
                "default model '{}' is not in the price table",
                default_model
            ))
        })?;

        let enabled = env::var("PROMPTFORGE_AI_ENABLED")
            .map(|v| matches!(v.trim().to_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        let api_key = env::var("OPENROUTER_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty());

        if enabled && api_key.is_none() {
            return Err(AppError::Config(
                "AI enhancement enabled but OPENROUTER_API_KEY is not set".to_string(),
            ));
        }

        let endpoint = Url::parse(
            &env::var("PROMPTFORGE_AI_ENDPOINT")
                .unwrap_or_else(|_| DEFAULT_AI_ENDPOINT.to_string()),
        )?;

        let model =
            env::var("PROMPTFORGE_AI_MODEL").unwrap_or_else(|_| DEFAULT_AI_MODEL.to_string());

        Ok(Self {
            bind_addr,
            default_model,
            ai: AiSettings {
                enabled,
                api_key,
                endpoint,
                model,
            },
        })
    }

    /// Whether the external AI path can actually be attempted.
    pub fn ai_available(&self) -> bool {
        self.ai.enabled && self.ai.api_key.is_some()
    }
}
