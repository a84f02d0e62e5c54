use crate::shared::api_utils::{api_url, describe_error};
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u501_remix_artifact::{RemixArtifact, RemixRequest, RemixResponse};
use gloo_net::http::Request;

/// POST /api/u501/remix
pub async fn remix_artifact(request: &RemixRequest) -> Result<RemixResponse, String> {
    let url = api_url(&RemixArtifact::api_path("remix"));

    let body = serde_json::to_string(request).map_err(|e| format!("Failed to serialize: {}", e))?;

    let response = Request::post(&url)
        .header("Content-Type", "application/json")
        .body(body)
        .map_err(|e| format!("Failed to build request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send: {}", e))?;

    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))?;

    if status != 200 {
        return Err(describe_error(status, &text));
    }

    let remixed = serde_json::from_str::<RemixResponse>(&text)
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    if remixed.html.trim().is_empty() {
        return Err("Remix returned empty markup".to_string());
    }

    Ok(remixed)
}
