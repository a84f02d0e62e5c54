use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub llm: LlmConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
    /// Собранный фронтенд (trunk dist), включая статические артефакты `init/`
    pub static_dir: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LlmConfig {
    pub api_base: String,
    /// Имя переменной окружения с ключом API
    pub api_key_env: String,
    /// Без значения запрос к модели не ограничен по времени
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

/// Переменная окружения, проверяемая если основная не задана
const FALLBACK_API_KEY_ENV: &str = "API_KEY";

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
port = 3000
static_dir = "crates/frontend/dist"

[llm]
api_base = "https://generativelanguage.googleapis.com/v1beta"
api_key_env = "GEMINI_API_KEY"
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                let config: Config = toml::from_str(&contents)?;
                return Ok(config);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

/// Resolve the static directory. Relative paths are tried next to the
/// executable first, then relative to the current directory.
pub fn get_static_dir(config: &Config) -> PathBuf {
    let dir = Path::new(&config.server.static_dir);

    if dir.is_absolute() {
        return dir.to_path_buf();
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let resolved = exe_dir.join(dir);
            if resolved.exists() {
                return resolved;
            }
        }
    }

    dir.to_path_buf()
}

/// Read the API credential from the configured environment variable.
pub fn get_api_key(config: &LlmConfig) -> Option<String> {
    read_api_key(config, |name| std::env::var(name).ok())
}

fn read_api_key(config: &LlmConfig, lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
    [config.api_key_env.as_str(), FALLBACK_API_KEY_ENV]
        .into_iter()
        .filter_map(|name| lookup(name))
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: Result<Config, _> = toml::from_str(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.llm.api_key_env, "GEMINI_API_KEY");
        assert_eq!(config.llm.request_timeout_secs, None);
    }

    #[test]
    fn test_timeout_is_optional() {
        let config: Config = toml::from_str(
            r#"
            [server]
            port = 8080
            static_dir = "/srv/arcade"

            [llm]
            api_base = "http://localhost:9000"
            api_key_env = "ARCADE_KEY"
            request_timeout_secs = 600
            "#,
        )
        .unwrap();
        assert_eq!(config.llm.request_timeout_secs, Some(600));
        assert_eq!(get_static_dir(&config), PathBuf::from("/srv/arcade"));
    }

    #[test]
    fn test_api_key_lookup_order() {
        let config: Config = toml::from_str(DEFAULT_CONFIG).unwrap();

        let primary = read_api_key(&config.llm, |name| match name {
            "GEMINI_API_KEY" => Some("primary".to_string()),
            "API_KEY" => Some("fallback".to_string()),
            _ => None,
        });
        assert_eq!(primary.as_deref(), Some("primary"));

        let fallback = read_api_key(&config.llm, |name| match name {
            "GEMINI_API_KEY" => Some("   ".to_string()),
            "API_KEY" => Some("fallback".to_string()),
            _ => None,
        });
        assert_eq!(fallback.as_deref(), Some("fallback"));

        assert_eq!(read_api_key(&config.llm, |_| None), None);
    }
}
