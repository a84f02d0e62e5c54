use axum::{
    extract::DefaultBodyLimit,
    http::{header, Method},
    middleware,
    routing::{get, post},
    Router,
};
use std::path::Path;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::handlers;
use crate::system::middleware::request_logger::request_logger;

/// Артефакт целиком уходит в теле запроса remix
const REMIX_BODY_LIMIT: usize = 16 * 1024 * 1024;

/// Конфигурация всех роутов приложения
///
/// Всё, что не API, отдаётся из собранного фронтенда, включая `init/*.html`.
pub fn configure_routes(static_dir: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    Router::new()
        .route("/health", get(|| async { "ok" }))
        // UseCase u501: Remix artifact
        .route(
            "/api/u501/remix",
            post(handlers::usecases::u501_remix).layer(DefaultBodyLimit::max(REMIX_BODY_LIMIT)),
        )
        .fallback_service(ServeDir::new(static_dir))
        .layer(middleware::from_fn(request_logger))
        .layer(cors)
}
