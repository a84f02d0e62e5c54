use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Ошибки LLM провайдера
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("Authentication error: {0}")]
    AuthError(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Model returned no text")]
    EmptyResponse,
}

/// Запрос генерации: системная инструкция и упорядоченные текстовые части
/// одного пользовательского сообщения
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateRequest {
    pub model: String,
    pub system_instruction: String,
    pub parts: Vec<String>,
}

impl GenerateRequest {
    pub fn new(model: impl Into<String>, system_instruction: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            system_instruction: system_instruction.into(),
            parts: Vec::new(),
        }
    }

    pub fn with_part(mut self, text: impl Into<String>) -> Self {
        self.parts.push(text.into());
        self
    }
}

/// Ответ от LLM
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmResponse {
    pub content: String,
    pub tokens_used: Option<i32>,
    pub model: String,
    pub finish_reason: Option<String>,
}

/// Трейт для LLM провайдеров
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Одиночный запрос генерации, без стриминга
    async fn generate(&self, request: &GenerateRequest) -> Result<LlmResponse, LlmError>;

    /// Получить название провайдера
    fn provider_name(&self) -> &str;
}
