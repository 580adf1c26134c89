use axum::Json;
use contracts::domain::a001_shop::ShopDto;

use crate::domain::a001_shop::repository;
use crate::shared::data::db::get_connection;

/// Handler для получения списка магазинов
pub async fn list_all() -> Result<Json<Vec<ShopDto>>, axum::http::StatusCode> {
    let shops = repository::list_active(get_connection())
        .await
        .map_err(|e| {
            tracing::error!("Failed to list shops: {}", e);
            axum::http::StatusCode::INTERNAL_SERVER_ERROR
        })?;

    Ok(Json(shops))
}
