pub mod handlers;
pub mod routes;
pub mod shared;
pub mod system;
pub mod usecases;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;

use shared::config;
use shared::llm::GeminiProvider;
use usecases::u501_remix_artifact::RemixExecutor;

/// Исполнитель remix из конфигурации; без ключа API сервер всё равно стартует
fn build_remix_executor(llm: &config::LlmConfig) -> anyhow::Result<RemixExecutor> {
    let Some(api_key) = config::get_api_key(llm) else {
        tracing::warn!(
            "{} is not set: remix requests will be rejected with 503",
            llm.api_key_env
        );
        return Ok(RemixExecutor::unconfigured());
    };

    let timeout = llm.request_timeout_secs.map(Duration::from_secs);
    let provider = GeminiProvider::new(llm.api_base.clone(), api_key, timeout)
        .map_err(|e| anyhow::anyhow!("LLM provider init failed: {e}"))?;
    tracing::info!(
        "Remix provider: Gemini at {} (timeout: {:?})",
        llm.api_base,
        timeout
    );

    Ok(RemixExecutor::new(Arc::new(provider)))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    system::tracing::initialize()?;

    let config = config::load_config()?;
    handlers::usecases::init_remix_executor(build_remix_executor(&config.llm)?);

    let static_dir = config::get_static_dir(&config);
    if !static_dir.exists() {
        tracing::warn!(
            "Static directory {} does not exist; build the frontend with trunk first",
            static_dir.display()
        );
    }
    tracing::info!("Serving static files from {}", static_dir.display());

    let app = routes::configure_routes(&static_dir);

    let port = config.server.port;
    let addr: SocketAddr = ([0, 0, 0, 0], port).into();

    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Error: Port {} is already in use. Please ensure no other process is using this port.",
                    port
                );
            } else {
                tracing::error!("Failed to bind to port {}. Error: {}", port, e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}
