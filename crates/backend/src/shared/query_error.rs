use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use contracts::shared::query::ErrorBody;

/// Ошибки выполнения запроса к коллекции документов
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error("Unknown collection: {0}")]
    UnknownCollection(String),

    #[error("Unsupported filter field: {0}")]
    UnsupportedFilterField(String),

    #[error("Unsupported sort field: {0}")]
    UnsupportedSortField(String),

    #[error("Filter value for {0} must be a string")]
    InvalidFilterValue(String),

    /// Строка в базе не приводится к документу. Отклоняется весь ответ
    /// (500), отдельные строки не пропускаются.
    #[error("Stored record {id} is invalid: {reason}")]
    InvalidRecord { id: String, reason: String },

    #[error("Storage error: {0}")]
    Storage(#[from] sea_orm::DbErr),
}

impl QueryError {
    pub fn status(&self) -> StatusCode {
        match self {
            QueryError::UnknownCollection(_) => StatusCode::NOT_FOUND,
            QueryError::UnsupportedFilterField(_)
            | QueryError::UnsupportedSortField(_)
            | QueryError::InvalidFilterValue(_) => StatusCode::BAD_REQUEST,
            QueryError::InvalidRecord { .. } | QueryError::Storage(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for QueryError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Collection query failed: {}", self);
        } else {
            tracing::warn!("Collection query rejected: {}", self);
        }

        (
            status,
            Json(ErrorBody {
                message: self.to_string(),
            }),
        )
            .into_response()
    }
}
