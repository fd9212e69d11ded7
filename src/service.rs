use crate::completion::{CompletionClient, CompletionRequest};
use crate::error::{AppError, ConfigError, Result, EMPTY_TOPIC, MISSING_TOPIC};
use crate::models::{ChatMessage, GenerateRequest};
use crate::prompts::{self, SYSTEM_PROMPT};
use std::str::FromStr;
use std::sync::Arc;
use tracing::{info, warn};

pub const MAX_TOKENS: u32 = 2000;
pub const SINGLE_TEMPERATURE: f32 = 0.7;
pub const DUAL_TEMPERATURE: f32 = 0.3;

/// How many completion calls one request makes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GenerationMode {
    /// One combined prompt, returned verbatim.
    #[default]
    Single,
    /// Quick intro then detailed framework, joined under section headers.
    Dual,
}

impl FromStr for GenerationMode {
    type Err = ConfigError;

    fn from_str(raw: &str) -> std::result::Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "single" => Ok(GenerationMode::Single),
            "dual" | "two" => Ok(GenerationMode::Dual),
            _ => Err(ConfigError::InvalidMode(raw.to_string())),
        }
    }
}

pub struct GenerationService {
    client: Arc<dyn CompletionClient>,
    mode: GenerationMode,
    model: String,
}

impl GenerationService {
    pub fn new(client: Arc<dyn CompletionClient>, mode: GenerationMode, model: &str) -> Self {
        Self {
            client,
            mode,
            model: model.to_string(),
        }
    }

    pub fn mode(&self) -> GenerationMode {
        self.mode
    }

    /// Validates the payload, runs the configured completion flow and returns the result text.
    pub async fn generate(&self, request: Option<GenerateRequest>) -> Result<String> {
        let topic = validate(request)?;
        info!("Generation started: {} ({:?})", topic, self.mode);

        let result = match self.mode {
            GenerationMode::Single => {
                self.complete(
                    vec![ChatMessage::user(prompts::combined_prompt(&topic))],
                    SINGLE_TEMPERATURE,
                )
                .await?
            }
            GenerationMode::Dual => {
                let quick_intro = self
                    .complete(
                        vec![
                            ChatMessage::system(SYSTEM_PROMPT),
                            ChatMessage::user(prompts::quick_intro_prompt(&topic)),
                        ],
                        DUAL_TEMPERATURE,
                    )
                    .await?;
                let detailed = self
                    .complete(
                        vec![
                            ChatMessage::system(SYSTEM_PROMPT),
                            ChatMessage::user(prompts::detailed_prompt(&topic)),
                        ],
                        DUAL_TEMPERATURE,
                    )
                    .await?;
                prompts::combine_sections(&quick_intro, &detailed)
            }
        };

        info!("Generation finished: {} ({} chars)", topic, result.chars().count());
        Ok(result)
    }

    async fn complete(&self, messages: Vec<ChatMessage>, temperature: f32) -> Result<String> {
        let request = CompletionRequest {
            model: self.model.clone(),
            messages,
            temperature,
            max_tokens: MAX_TOKENS,
        };
        Ok(self.client.complete(request).await?)
    }
}

/// Returns the trimmed topic or the caller-facing reason it was rejected.
pub fn validate(request: Option<GenerateRequest>) -> Result<String> {
    let Some(raw) = request.and_then(|req| req.topic) else {
        warn!("Rejected request without topic");
        return Err(AppError::Validation(MISSING_TOPIC.to_string()));
    };

    let topic = raw.trim();
    if topic.is_empty() {
        warn!("Rejected request with empty topic");
        return Err(AppError::Validation(EMPTY_TOPIC.to_string()));
    }
    Ok(topic.to_string())
}
