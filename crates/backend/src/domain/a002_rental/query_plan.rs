//! Перевод `CollectionQuery` в колонки таблицы a002_rental.
//!
//! Поддерживается только белый список полей: всё остальное отклоняется
//! с `QueryError`, а не превращается в произвольный SQL.

use contracts::domain::a002_rental::fields;
use contracts::shared::query::{CollectionQuery, SortDirection};

use super::repository::Column;
use crate::shared::query_error::QueryError;

#[derive(Debug, Clone)]
pub struct RentalQueryPlan {
    pub filters: Vec<(Column, String)>,
    pub order: Option<(Column, SortDirection)>,
}

pub fn filter_column(field: &str) -> Option<Column> {
    match field {
        fields::ID => Some(Column::Id),
        fields::SHOP_ID => Some(Column::ShopId),
        fields::RENTAL_STATE => Some(Column::RentalState),
        _ => None,
    }
}

pub fn sort_column(field: &str) -> Option<Column> {
    match field {
        fields::END_DATE => Some(Column::EndDate),
        fields::CHARGE_AMOUNT => Some(Column::ChargeAmount),
        fields::LAST_NAME => Some(Column::LastName),
        _ => None,
    }
}

pub fn plan(query: &CollectionQuery) -> Result<RentalQueryPlan, QueryError> {
    let filters = query
        .filters
        .iter()
        .map(|filter| {
            let column = filter_column(&filter.field)
                .ok_or_else(|| QueryError::UnsupportedFilterField(filter.field.clone()))?;
            let value = filter
                .value
                .as_str()
                .ok_or_else(|| QueryError::InvalidFilterValue(filter.field.clone()))?;
            Ok((column, value.to_string()))
        })
        .collect::<Result<Vec<_>, QueryError>>()?;

    let order = match &query.order_by {
        Some(order_by) => Some((
            sort_column(&order_by.field)
                .ok_or_else(|| QueryError::UnsupportedSortField(order_by.field.clone()))?,
            order_by.direction,
        )),
        None => None,
    };

    Ok(RentalQueryPlan { filters, order })
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::dashboards::d400_rentals_report::completed_rentals_query;
    use sea_orm::IdenStatic;

    #[test]
    fn test_plan_for_report_query() {
        let plan = plan(&completed_rentals_query("s-1")).unwrap();

        let filters: Vec<(&str, &str)> = plan
            .filters
            .iter()
            .map(|(column, value)| (column.as_str(), value.as_str()))
            .collect();
        assert_eq!(
            filters,
            vec![("shop_id", "s-1"), ("rental_state", "COMPLETED")]
        );

        let (column, direction) = plan.order.unwrap();
        assert_eq!(column.as_str(), "end_date");
        assert_eq!(direction, SortDirection::Asc);
    }

    #[test]
    fn test_plan_without_order() {
        let query = CollectionQuery::collection("rentals").where_eq("id", "r-9");
        let plan = plan(&query).unwrap();

        assert_eq!(plan.filters.len(), 1);
        assert!(plan.order.is_none());
    }

    #[test]
    fn test_plan_rejects_unknown_fields() {
        let query = CollectionQuery::collection("rentals").where_eq("charge.amount", "10");
        assert!(matches!(
            plan(&query),
            Err(QueryError::UnsupportedFilterField(field)) if field == "charge.amount"
        ));

        let query =
            CollectionQuery::collection("rentals").order_by("shopId", SortDirection::Desc);
        assert!(matches!(
            plan(&query),
            Err(QueryError::UnsupportedSortField(field)) if field == "shopId"
        ));
    }

    #[test]
    fn test_plan_rejects_non_string_values() {
        let query = CollectionQuery::collection("rentals").where_eq("shopId", 42);
        assert!(matches!(
            plan(&query),
            Err(QueryError::InvalidFilterValue(field)) if field == "shopId"
        ));
    }
}
