use axum::{extract::Path, Json};
use contracts::domain::a002_rental::{RentalDto, COLLECTION_NAME};
use contracts::shared::query::{CollectionQuery, QueryResponse};
use sea_orm::DatabaseConnection;

use crate::domain::a002_rental::{query_plan, repository};
use crate::shared::data::db::get_connection;
use crate::shared::query_error::QueryError;

/// Handler шлюза запросов: POST /api/collections/:collection/query
pub async fn query_collection(
    Path(collection): Path<String>,
    Json(mut query): Json<CollectionQuery>,
) -> Result<Json<QueryResponse<RentalDto>>, QueryError> {
    query.collection = collection;
    let documents = run_query(get_connection(), &query).await?;

    tracing::debug!(
        "Query on {} returned {} documents",
        query.collection,
        documents.len()
    );

    Ok(Json(QueryResponse { documents }))
}

pub async fn run_query(
    db: &DatabaseConnection,
    query: &CollectionQuery,
) -> Result<Vec<RentalDto>, QueryError> {
    match query.collection.as_str() {
        COLLECTION_NAME => {
            let plan = query_plan::plan(query)?;
            repository::list_by_plan(db, &plan)
                .await?
                .into_iter()
                .map(repository::Model::into_dto)
                .collect()
        }
        other => Err(QueryError::UnknownCollection(other.to_string())),
    }
}
