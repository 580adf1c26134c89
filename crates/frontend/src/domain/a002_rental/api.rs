use async_trait::async_trait;
use contracts::domain::a002_rental::RentalDto;
use contracts::shared::query::{CollectionQuery, ErrorBody, QueryResponse};
use gloo_net::http::Request;

use super::gateway::{FetchError, RentalGateway};
use crate::shared::api_utils::api_url;

/// Путь эндпоинта запросов к коллекции
pub fn collection_query_path(collection: &str) -> String {
    format!("/api/collections/{}/query", collection)
}

/// Сообщение для ответа с кодом не 2xx: `message` из тела, иначе код статуса
pub fn http_error_message(status: u16, body: Option<ErrorBody>) -> String {
    match body {
        Some(body) if !body.message.trim().is_empty() => body.message,
        _ => format!("HTTP error: {}", status),
    }
}

/// HTTP-реализация шлюза поверх backend-а (`POST /api/collections/{collection}/query`)
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpRentalGateway;

impl HttpRentalGateway {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait(?Send)]
impl RentalGateway for HttpRentalGateway {
    async fn query(&self, query: &CollectionQuery) -> Result<Vec<RentalDto>, FetchError> {
        let url = api_url(&collection_query_path(&query.collection));

        let response = Request::post(&url)
            .json(query)
            .map_err(|e| FetchError::new(format!("Failed to serialize request: {}", e)))?
            .send()
            .await
            .map_err(|e| FetchError::new(format!("Request failed: {}", e)))?;

        if !response.ok() {
            let status = response.status();
            let body = response.json::<ErrorBody>().await.ok();
            return Err(FetchError::new(http_error_message(status, body)));
        }

        let body: QueryResponse<RentalDto> = response
            .json()
            .await
            .map_err(|e| FetchError::new(format!("Failed to parse response: {}", e)))?;

        Ok(body.documents)
    }
}
