//! D400: отчёт по завершённым прокатам магазина

use crate::domain::a002_rental::{fields, RentalState, COLLECTION_NAME};
use crate::shared::query::{CollectionQuery, SortDirection};

/// Запрос отчёта: завершённые прокаты магазина по возрастанию даты окончания
pub fn completed_rentals_query(shop_id: &str) -> CollectionQuery {
    CollectionQuery::collection(COLLECTION_NAME)
        .where_eq(fields::SHOP_ID, shop_id)
        .where_eq(fields::RENTAL_STATE, RentalState::Completed.as_str())
        .order_by(fields::END_DATE, SortDirection::Asc)
}
