use crate::shared::llm::{GenerateRequest, LlmError, LlmProvider};
use contracts::domain::a001_game_artifact::prompts::generation_prompt;
use contracts::domain::a001_game_artifact::{ensure_remix_base_tag, strip_code_fences};
use contracts::usecases::u501_remix_artifact::{RemixArtifact, RemixRequest, RemixResponse};
use contracts::usecases::common::UseCaseMetadata;
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;

/// Системная инструкция: ограничения, которым должен удовлетворять результат
pub const SYSTEM_INSTRUCTION: &str = r#"
You are an expert Creative Technologist building "Curator's Run".
Modify the provided HTML/Three.js game code based on the user's remix request.
STRICTLY ADHERE to the "Curator's Run v3.5" PRD:
1. Player is a **LEGO-style Voxel Pirate Ship**.
2. Background is **Void Black / Deep Space** (Not Sepia).
3. Map is **Dark Blueprint/Constellation** (White lines on Black).
4. Use Procedural CanvasTextures.
5. Fix any shadow clipping (box artifacts) by ensuring shadow cameras are large enough.
Output ONLY the raw HTML code.
"#;

#[derive(Debug, Error)]
pub enum RemixError {
    #[error("Invalid remix request: {0}")]
    Validation(String),

    #[error("Generative API credential is not configured")]
    NotConfigured,

    #[error(transparent)]
    Provider(#[from] LlmError),
}

/// Исполнитель UseCase u501: один атомарный запрос к модели, без повторов
pub struct RemixExecutor {
    provider: Option<Arc<dyn LlmProvider>>,
}

impl RemixExecutor {
    pub fn new(provider: Arc<dyn LlmProvider>) -> Self {
        Self {
            provider: Some(provider),
        }
    }

    /// Без ключа API: каждый remix завершается `NotConfigured`
    pub fn unconfigured() -> Self {
        Self { provider: None }
    }

    pub async fn remix(&self, request: RemixRequest) -> Result<RemixResponse, RemixError> {
        request.validate().map_err(RemixError::Validation)?;
        let provider = self.provider.as_ref().ok_or(RemixError::NotConfigured)?;

        let generate = build_generate_request(&request);
        tracing::info!(
            "{}: variant={}, model={}, provider={}, html_len={}, instruction={:?}",
            RemixArtifact::full_name(),
            request.variant,
            generate.model,
            provider.provider_name(),
            request.html.len(),
            request.instruction
        );

        let start = Instant::now();
        let response = provider.generate(&generate).await?;

        // Пустота проверяется до вставки base tag, иначе пустой ответ станет "<base ...>"
        let stripped = strip_code_fences(&response.content);
        if stripped.is_empty() {
            return Err(RemixError::Provider(LlmError::EmptyResponse));
        }
        let html = ensure_remix_base_tag(&stripped);

        tracing::info!(
            "{}: done in {}ms, tokens={:?}, finish_reason={:?}, html_len={}",
            RemixArtifact::full_name(),
            start.elapsed().as_millis(),
            response.tokens_used,
            response.finish_reason,
            html.len()
        );

        Ok(RemixResponse {
            html,
            model: response.model,
        })
    }
}

/// Шаблон пользовательской инструкции
pub fn instruction_sentence(instruction: &str) -> String {
    format!(
        "REMIX INSTRUCTION: Apply this modification: \"{}\". Keep it single file.",
        instruction
    )
}

/// Системная инструкция + (ТЗ, текущий код, инструкция) для модели варианта
pub fn build_generate_request(request: &RemixRequest) -> GenerateRequest {
    GenerateRequest::new(request.variant.remote_model_id(), SYSTEM_INSTRUCTION)
        .with_part(format!("ORIGINAL SPEC:\n{}", generation_prompt(request.variant)))
        .with_part(format!("CURRENT CODE:\n{}", request.html))
        .with_part(instruction_sentence(&request.instruction))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::llm::LlmResponse;
    use async_trait::async_trait;
    use contracts::domain::a001_game_artifact::{ModelVariant, BASE_TAG};
    use std::sync::Mutex;

    struct StubProvider {
        reply: Mutex<Option<Result<String, LlmError>>>,
        seen: Mutex<Vec<GenerateRequest>>,
    }

    impl StubProvider {
        fn replying(reply: Result<&str, LlmError>) -> Arc<Self> {
            Arc::new(Self {
                reply: Mutex::new(Some(reply.map(str::to_string))),
                seen: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl LlmProvider for StubProvider {
        async fn generate(&self, request: &GenerateRequest) -> Result<LlmResponse, LlmError> {
            self.seen.lock().unwrap().push(request.clone());
            let content = self
                .reply
                .lock()
                .unwrap()
                .take()
                .expect("stub called twice")?;
            Ok(LlmResponse {
                content,
                tokens_used: Some(10),
                model: request.model.clone(),
                finish_reason: Some("STOP".to_string()),
            })
        }

        fn provider_name(&self) -> &str {
            "stub"
        }
    }

    fn request(variant: ModelVariant) -> RemixRequest {
        RemixRequest {
            variant,
            html: r#"<html><head><base href="./init/"></head><body>ship</body></html>"#
                .to_string(),
            instruction: "Visual: Red Alert".to_string(),
        }
    }

    #[test]
    fn test_generate_request_parts_in_order() {
        let generate = build_generate_request(&request(ModelVariant::Gemini2p5));
        assert_eq!(generate.model, "gemini-2.5-pro");
        assert_eq!(generate.system_instruction, SYSTEM_INSTRUCTION);
        assert_eq!(generate.parts.len(), 3);
        assert!(generate.parts[0].starts_with("ORIGINAL SPEC:\n"));
        assert!(generate.parts[0].ends_with("Optimized for Mobile Performance)"));
        assert!(generate.parts[1].starts_with("CURRENT CODE:\n<html>"));
        assert_eq!(
            generate.parts[2],
            "REMIX INSTRUCTION: Apply this modification: \"Visual: Red Alert\". Keep it single file."
        );
    }

    #[tokio::test]
    async fn test_fenced_reply_is_stripped_and_based() {
        let stub = StubProvider::replying(Ok(
            "```html\n<html><head><title>red</title></head><body></body></html>\n```",
        ));
        let executor = RemixExecutor::new(stub.clone());

        let response = executor.remix(request(ModelVariant::Gemini3)).await.unwrap();
        assert!(!response.html.contains("```"));
        assert_eq!(response.html.matches(BASE_TAG).count(), 1);
        assert!(response.html.starts_with("<html><head><base"));
        assert_eq!(response.model, "gemini-3-pro-preview");
        assert_eq!(stub.seen.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_reply_with_base_reference_not_reinjected() {
        let reply = r#"<html><head><base href="./init/"></head><body>storm</body></html>"#;
        let executor = RemixExecutor::new(StubProvider::replying(Ok(reply)));

        let response = executor.remix(request(ModelVariant::Gemini3)).await.unwrap();
        assert_eq!(response.html, reply);
    }

    #[tokio::test]
    async fn test_fence_only_reply_is_empty_error() {
        let executor = RemixExecutor::new(StubProvider::replying(Ok("```html\n```")));
        let err = executor.remix(request(ModelVariant::Gemini3)).await.unwrap_err();
        assert!(matches!(err, RemixError::Provider(LlmError::EmptyResponse)));
    }

    #[tokio::test]
    async fn test_whitespace_inside_fence_is_empty_error() {
        let executor = RemixExecutor::new(StubProvider::replying(Ok("```\n  \n\t```")));
        let err = executor.remix(request(ModelVariant::Gemini3)).await.unwrap_err();
        assert!(matches!(err, RemixError::Provider(LlmError::EmptyResponse)));
    }

    #[tokio::test]
    async fn test_provider_error_propagates() {
        let executor = RemixExecutor::new(StubProvider::replying(Err(LlmError::AuthError(
            "HTTP 401".to_string(),
        ))));
        let err = executor.remix(request(ModelVariant::Gemini3)).await.unwrap_err();
        assert!(matches!(err, RemixError::Provider(LlmError::AuthError(_))));
    }

    #[tokio::test]
    async fn test_validation_happens_before_provider_call() {
        let stub = StubProvider::replying(Ok("<html></html>"));
        let executor = RemixExecutor::new(stub.clone());
        let mut bad = request(ModelVariant::Gemini3);
        bad.instruction = "   ".to_string();

        let err = executor.remix(bad).await.unwrap_err();
        assert!(matches!(err, RemixError::Validation(_)));
        assert!(stub.seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unconfigured_executor() {
        let err = RemixExecutor::unconfigured()
            .remix(request(ModelVariant::Gemini3))
            .await
            .unwrap_err();
        assert!(matches!(err, RemixError::NotConfigured));
    }
}
