use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;

/// Конфигурация всех роутов приложения
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // A001 Shops: источник активного магазина для фронтенда
        .route("/api/a001/shop/list", get(handlers::a001_shop::list_all))
        // Шлюз запросов к коллекциям документов
        .route(
            "/api/collections/:collection/query",
            post(handlers::collections::query_collection),
        )
}
