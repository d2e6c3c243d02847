use async_openai::{config::OpenAIConfig, Client};
use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use secrecy::ExposeSecret;
use serde::Deserialize;
use serde_json::json;

use crate::{
    config::Config,
    errors::{AppError, AppResult},
};

/// Text in, text out. Failures surface as [`AppError::GenerationError`].
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> AppResult<String>;
}

#[derive(Debug, Deserialize)]
struct ChatCompletion {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

/// Chat-completions backed generator for any OpenAI-compatible endpoint.
pub struct ModelService {
    client: Client<OpenAIConfig>,
    model: String,
}

impl ModelService {
    pub fn new(config: &Config) -> Self {
        let openai_config = OpenAIConfig::new()
            .with_api_key(config.generation_api_key.expose_secret())
            .with_api_base(&config.generation_api_base);

        Self {
            client: Client::with_config(openai_config),
            model: config.generation_model.clone(),
        }
    }
}

#[async_trait]
impl TextGenerator for ModelService {
    async fn generate(&self, prompt: &str) -> AppResult<String> {
        log::info!(
            "Requesting completion from {} ({} prompt chars)",
            self.model,
            prompt.chars().count()
        );

        let request = json!({
            "model": self.model,
            "messages": [{ "role": "user", "content": prompt }],
        });

        let completion: ChatCompletion = self
            .client
            .chat()
            .create_byot(request)
            .await
            .map_err(|e| {
                log::error!("Generation call failed: {}", e);
                AppError::GenerationError(e.to_string())
            })?;

        completion_text(completion)
    }
}

fn completion_text(completion: ChatCompletion) -> AppResult<String> {
    completion
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or_else(|| AppError::GenerationError("model returned no text".to_string()))
}
