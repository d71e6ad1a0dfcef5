//! Model price table and token/cost estimation.
//!
//! The table is read-only process-wide configuration: built once, never
//! mutated. An unknown model id is a hard error; silently guessing a price
//! would make the cost estimate worthless.
//!
//! Token counting is two-tier: OpenAI-family models attempt an exact subword
//! count via tiktoken, and every failure of that path degrades to the word
//! heuristic. All other providers always use the heuristic.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::LazyLock;
use tracing::warn;

use crate::error::AppError;

/// Calibration constant standing in for subword fragmentation: tokens per
/// whitespace-separated word. Changing it changes every estimate.
pub const TOKENS_PER_WORD: f64 = 1.3;

/// Model provider families
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    OpenAi,
    Anthropic,
    Groq,
    Other,
}

impl Provider {
    /// Whether an exact subword tokenizer is available for this family
    fn supports_exact_tokenization(&self) -> bool {
        matches!(self, Provider::OpenAi)
    }
}

/// Immutable per-model pricing profile
#[derive(Debug, Clone, Serialize)]
pub struct ModelProfile {
    pub id: &'static str,
    pub display_name: &'static str,
    pub provider: Provider,
    /// USD per input token
    pub price_per_input_token: f64,
}

/// The supported model catalog. Prices are per input token.
static MODELS: &[ModelProfile] = &[
    ModelProfile {
        id: "gpt-4o",
        display_name: "GPT-4o",
        provider: Provider::OpenAi,
        price_per_input_token: 5.0 / 1e6,
    },
    ModelProfile {
        id: "gpt-4.1",
        display_name: "GPT-4.1",
        provider: Provider::OpenAi,
        price_per_input_token: 10.0 / 1e6,
    },
    ModelProfile {
        id: "gpt-3.5-turbo",
        display_name: "GPT-3.5 Turbo",
        provider: Provider::OpenAi,
        price_per_input_token: 0.5 / 1e6,
    },
    ModelProfile {
        id: "claude-3-opus",
        display_name: "Claude 3 Opus",
        provider: Provider::Anthropic,
        price_per_input_token: 15.0 / 1e6,
    },
    ModelProfile {
        id: "claude-3.5-sonnet",
        display_name: "Claude 3.5 Sonnet",
        provider: Provider::Anthropic,
        price_per_input_token: 3.0 / 1e6,
    },
    ModelProfile {
        id: "claude-3-haiku",
        display_name: "Claude 3 Haiku",
        provider: Provider::Anthropic,
        price_per_input_token: 0.25 / 1e6,
    },
    ModelProfile {
        id: "llama-3-70b",
        display_name: "Llama 3 70B",
        provider: Provider::Groq,
        price_per_input_token: 0.59 / 1e6,
    },
    ModelProfile {
        id: "mixtral-8x7b",
        display_name: "Mixtral 8x7B",
        provider: Provider::Groq,
        price_per_input_token: 0.24 / 1e6,
    },
    ModelProfile {
        id: "gemma-3-12b",
        display_name: "Gemma 3 12B",
        provider: Provider::Other,
        price_per_input_token: 0.1 / 1e6,
    },
];

static MODEL_INDEX: LazyLock<HashMap<&'static str, &'static ModelProfile>> =
    LazyLock::new(|| MODELS.iter().map(|m| (m.id, m)).collect());

/// The full model catalog, in declaration order.
pub fn models() -> &'static [ModelProfile] {
    MODELS
}

/// Resolve a model id to its profile. Unknown ids are a hard error.
pub fn lookup(model_id: &str) -> Result<&'static ModelProfile, AppError> {
    MODEL_INDEX
        .get(model_id)
        .copied()
        .ok_or_else(|| AppError::UnknownModel(model_id.to_string()))
}

/// Token count and derived cost for one prompt/model pair.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TokenEstimate {
    pub tokens: usize,
    /// USD, computed as tokens * price_per_input_token
    pub cost: f64,
}

impl TokenEstimate {
    /// Canonical externally-visible cost representation: fixed-point,
    /// six decimal places.
    pub fn cost_string(&self) -> String {
        format!("{:.6}", self.cost)
    }
}

/// Whitespace-separated word count, empty tokens discarded.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Approximate token count: `ceil(words * 1.3)`.
pub fn approximate_tokens(text: &str) -> usize {
    (word_count(text) as f64 * TOKENS_PER_WORD).ceil() as usize
}

/// Exact subword count for OpenAI-family models.
fn exact_tokens(model_id: &str, text: &str) -> anyhow::Result<usize> {
    let bpe = tiktoken_rs::get_bpe_from_model(model_id)?;
    Ok(bpe.encode_with_special_tokens(text).len())
}

/// Estimate token count and cost for a prompt against a model.
///
/// Unknown model ids return `AppError::UnknownModel`. A failed exact
/// tokenization is logged and silently replaced by the approximate count;
/// it never interrupts the response.
pub fn estimate(text: &str, model_id: &str) -> Result<TokenEstimate, AppError> {
    let profile = lookup(model_id)?;

    let tokens = if profile.provider.supports_exact_tokenization() {
        match exact_tokens(model_id, text) {
            Ok(count) => count,
            Err(err) => {
                warn!(
                    model = model_id,
                    error = %err,
                    "exact tokenization failed, falling back to word estimate"
                );
                approximate_tokens(text)
            }
        }
    } else {
        approximate_tokens(text)
    };

    Ok(TokenEstimate {
        tokens,
        cost: tokens as f64 * profile.price_per_input_token,
    })
}
