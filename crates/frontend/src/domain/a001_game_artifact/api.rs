use gloo_net::http::Request;

/// Загрузить статический артефакт по относительному пути.
///
/// Returns the raw document; base path rewriting happens when the result is
/// committed to state.
pub async fn fetch_artifact(path: &str) -> Result<String, String> {
    let response = Request::get(path)
        .send()
        .await
        .map_err(|e| format!("Failed to fetch {}: {}", path, e))?;

    if !response.ok() {
        return Err(format!("Failed to load {}: HTTP {}", path, response.status()));
    }

    response
        .text()
        .await
        .map_err(|e| format!("Failed to read {}: {}", path, e))
}
