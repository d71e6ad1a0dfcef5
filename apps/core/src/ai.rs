//! External AI enhancement path.
//!
//! The engine never depends on this module. The HTTP layer decides whether
//! to attempt an external rewrite and always holds the rule-based output as
//! the fallback, selected by explicit branching rather than exceptions.

use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

use crate::config::AiSettings;
use crate::engine::OutputFormat;
use crate::error::AppError;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const MAX_TOKENS: u32 = 1500;
const TEMPERATURE: f32 = 0.7;

/// Capability abstraction for "enhance via external model".
#[async_trait]
pub trait PromptRewriter: Send + Sync {
    /// Rewrite a prompt through an external model into the structured
    /// scaffold shape.
    async fn rewrite(
        &self,
        prompt: &str,
        role: &str,
        format: OutputFormat,
    ) -> Result<String, AppError>;
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: String,
}

/// OpenRouter-compatible chat completions client.
#[derive(Debug)]
pub struct OpenRouterClient {
    client: Client,
    endpoint: Url,
    api_key: String,
    model: String,
}

impl OpenRouterClient {
    /// Build a client from resolved settings. Requires an API key.
    pub fn from_settings(settings: &AiSettings) -> Result<Self, AppError> {
        let api_key = settings
            .api_key
            .clone()
            .ok_or_else(|| AppError::Config("missing OpenRouter API key".to_string()))?;

        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self {
            client,
            endpoint: settings.endpoint.clone(),
            api_key,
            model: settings.model.clone(),
        })
    }

    fn system_prompt(role: &str, format: OutputFormat) -> String {
        format!(
            "You are a prompt enhancement assistant. Rewrite the user's prompt \
             in this structured format:\n\n\
             ROLE: {role}\n\
             OBJECTIVE: [Clear goal based on the user's request]\n\
             CONTEXT: [Relevant context for the task]\n\
             DATA: [Data requirements, constraints, guidelines]\n\n\
             Output ONLY in this format. Format as {} if applicable.",
            format.name()
        )
    }
}

#[async_trait]
impl PromptRewriter for OpenRouterClient {
    async fn rewrite(
        &self,
        prompt: &str,
        role: &str,
        format: OutputFormat,
    ) -> Result<String, AppError> {
        let system = Self::system_prompt(role, format);
        let body = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: &system,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AppError::Upstream(format!(
                "chat completion returned {}",
                response.status()
            )));
        }

        let parsed: ChatResponse = response.json().await?;
        let content = parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .unwrap_or_default();

        if content.trim().is_empty() {
            return Err(AppError::Upstream(
                "chat completion returned no content".to_string(),
            ));
        }

        Ok(content.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_prompt_names_role_and_format() {
        let prompt = OpenRouterClient::system_prompt("Expert Assistant", OutputFormat::Json);
        assert!(prompt.contains("ROLE: Expert Assistant"));
        assert!(prompt.contains("Format as JSON"));
    }
}
