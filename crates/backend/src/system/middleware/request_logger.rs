use axum::body::{to_bytes, Body};
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;

use crate::shared::format::format_size;

/// Middleware для логирования HTTP запросов
///
/// Пишет одну строку на запрос: длительность, размер ответа,
/// статус, метод и путь. Ответы 4xx/5xx уходят на уровне warn.
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;
    let (parts, body) = response.into_parts();

    // Читаем тело ответа, чтобы узнать реальный размер
    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(b) => b,
        Err(e) => {
            tracing::error!(
                "{:>5}ms | {:>10} | {} {:>6} {} ({})",
                start.elapsed().as_millis(),
                "error",
                parts.status.as_u16(),
                method,
                path,
                e
            );
            return Response::from_parts(parts, Body::default());
        }
    };

    let elapsed_ms = start.elapsed().as_millis();
    let size = format_size(bytes.len());
    let status = parts.status;

    if status.is_client_error() || status.is_server_error() {
        tracing::warn!(
            "{:>5}ms | {:>10} | {} {:>6} {}",
            elapsed_ms,
            size,
            status.as_u16(),
            method,
            path
        );
    } else {
        tracing::info!(
            "{:>5}ms | {:>10} | {} {:>6} {}",
            elapsed_ms,
            size,
            status.as_u16(),
            method,
            path
        );
    }

    Response::from_parts(parts, Body::from(bytes))
}
