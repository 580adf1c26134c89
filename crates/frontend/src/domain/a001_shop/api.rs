use contracts::domain::a001_shop::ShopDto;
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Список магазинов, отсортированный по имени
pub async fn fetch_shops() -> Result<Vec<ShopDto>, String> {
    let response = Request::get(&api_url("/api/a001/shop/list"))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
