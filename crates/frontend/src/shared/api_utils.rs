//! Адрес backend и разбор его ошибок

use contracts::usecases::common::UseCaseError;

/// Port the backend listens on (see backend `config.toml`)
const BACKEND_PORT: u16 = 3000;

/// "http://<host>:3000" для текущей страницы; пусто вне браузера
pub fn api_base() -> String {
    let Some(window) = web_sys::window() else {
        return String::new();
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, BACKEND_PORT)
}

pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Текст ошибки из тела неуспешного ответа API
pub fn describe_error(status: u16, body: &str) -> String {
    match serde_json::from_str::<UseCaseError>(body) {
        Ok(err) => format!("Server error {}: {}", status, err),
        Err(_) if body.trim().is_empty() => format!("Server error: {}", status),
        Err(_) => format!("Server error {}: {}", status, body.trim()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_error() {
        let body = r#"{"code":"EXTERNAL","message":"Generative API call failed","details":"HTTP 500"}"#;
        assert_eq!(
            describe_error(502, body),
            "Server error 502: [EXTERNAL] Generative API call failed: HTTP 500"
        );
        assert_eq!(describe_error(500, ""), "Server error: 500");
        assert_eq!(describe_error(422, "missing field `variant`"), "Server error 422: missing field `variant`");
    }
}
