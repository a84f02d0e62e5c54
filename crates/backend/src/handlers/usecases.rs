use axum::{http::StatusCode, Json};
use contracts::usecases::common::{ErrorCode, UseCaseError};
use contracts::usecases::u501_remix_artifact::{RemixRequest, RemixResponse};
use once_cell::sync::OnceCell;
use std::sync::Arc;

use crate::shared::llm::LlmError;
use crate::usecases::u501_remix_artifact::{RemixError, RemixExecutor};

// ============================================================================
// UseCase u501: Remix artifact
// ============================================================================

static REMIX_EXECUTOR: OnceCell<Arc<RemixExecutor>> = OnceCell::new();

/// Установить исполнитель при старте (до приёма запросов)
pub fn init_remix_executor(executor: RemixExecutor) {
    if REMIX_EXECUTOR.set(Arc::new(executor)).is_err() {
        tracing::warn!("Remix executor already initialized, keeping the first one");
    }
}

fn remix_executor() -> Arc<RemixExecutor> {
    REMIX_EXECUTOR
        .get_or_init(|| Arc::new(RemixExecutor::unconfigured()))
        .clone()
}

type ApiError = (StatusCode, Json<UseCaseError>);

fn error_response(err: &RemixError) -> ApiError {
    let (status, body) = match err {
        RemixError::Validation(msg) => (
            StatusCode::BAD_REQUEST,
            UseCaseError::new(ErrorCode::Validation, msg.as_str()),
        ),
        RemixError::NotConfigured => (
            StatusCode::SERVICE_UNAVAILABLE,
            UseCaseError::new(ErrorCode::Unavailable, err.to_string()),
        ),
        RemixError::Provider(LlmError::RateLimitExceeded) => (
            StatusCode::TOO_MANY_REQUESTS,
            UseCaseError::new(ErrorCode::RateLimited, "Generative API rate limit exceeded"),
        ),
        RemixError::Provider(inner) => (
            StatusCode::BAD_GATEWAY,
            UseCaseError::new(ErrorCode::External, "Generative API call failed")
                .with_details(inner.to_string()),
        ),
    };
    (status, Json(body))
}

/// POST /api/u501/remix
pub async fn u501_remix(Json(request): Json<RemixRequest>) -> Result<Json<RemixResponse>, ApiError> {
    match remix_executor().remix(request).await {
        Ok(response) => Ok(Json(response)),
        Err(e) => {
            tracing::error!("Remix failed: {}", e);
            Err(error_response(&e))
        }
    }
}
