use super::types::{GenerateRequest, LlmError, LlmProvider, LlmResponse};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Провайдер Gemini (`models/{model}:generateContent`)
pub struct GeminiProvider {
    client: Client,
    api_base: String,
    api_key: String,
}

impl GeminiProvider {
    /// `timeout = None` — запрос ждёт ответа сколько угодно
    pub fn new(
        api_base: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, LlmError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| LlmError::NetworkError(e.to_string()))?;

        Ok(Self {
            client,
            api_base: api_base.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/models/{}:generateContent", self.api_base, model)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentBody {
    system_instruction: Content,
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize, Default)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    usage_metadata: Option<UsageMetadata>,
    model_version: Option<String>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Content,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UsageMetadata {
    total_token_count: Option<i32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

fn build_body(request: &GenerateRequest) -> GenerateContentBody {
    let text_part = |text: &String| Part {
        text: Some(text.clone()),
    };

    GenerateContentBody {
        system_instruction: Content {
            role: None,
            parts: vec![text_part(&request.system_instruction)],
        },
        contents: vec![Content {
            role: Some("user".to_string()),
            parts: request.parts.iter().map(text_part).collect(),
        }],
    }
}

/// Склеить текстовые части первого кандидата
fn parse_response(body: &str, requested_model: &str) -> Result<LlmResponse, LlmError> {
    let response: GenerateContentResponse =
        serde_json::from_str(body).map_err(|e| LlmError::MalformedResponse(e.to_string()))?;

    let Some(candidate) = response.candidates.first() else {
        let reason = response
            .prompt_feedback
            .and_then(|f| f.block_reason)
            .unwrap_or_else(|| "no candidates".to_string());
        return Err(LlmError::ApiError(format!("No response from API: {}", reason)));
    };

    let content: String = candidate
        .content
        .parts
        .iter()
        .filter_map(|p| p.text.as_deref())
        .collect();

    if content.trim().is_empty() {
        return Err(LlmError::EmptyResponse);
    }

    Ok(LlmResponse {
        content,
        tokens_used: response.usage_metadata.and_then(|u| u.total_token_count),
        model: response
            .model_version
            .unwrap_or_else(|| requested_model.to_string()),
        finish_reason: candidate.finish_reason.clone(),
    })
}

fn map_status_error(status: StatusCode, body: &str) -> LlmError {
    let message = serde_json::from_str::<ErrorEnvelope>(body)
        .map(|e| e.error.message)
        .unwrap_or_else(|_| body.to_string());
    let message = format!("HTTP {}: {}", status.as_u16(), message);

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => LlmError::AuthError(message),
        StatusCode::TOO_MANY_REQUESTS => LlmError::RateLimitExceeded,
        StatusCode::BAD_REQUEST | StatusCode::NOT_FOUND => LlmError::InvalidRequest(message),
        _ => LlmError::ApiError(message),
    }
}

#[async_trait]
impl LlmProvider for GeminiProvider {
    async fn generate(&self, request: &GenerateRequest) -> Result<LlmResponse, LlmError> {
        let body = build_body(request);

        let response = self
            .client
            .post(self.endpoint(&request.model))
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::NetworkError(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| LlmError::NetworkError(e.to_string()))?;

        if !status.is_success() {
            return Err(map_status_error(status, &text));
        }

        parse_response(&text, &request.model)
    }

    fn provider_name(&self) -> &str {
        "Gemini"
    }
}
