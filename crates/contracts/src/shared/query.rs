use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Предикат равенства по точечному пути поля
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldFilter {
    pub field: String,
    pub value: Value,
}

impl FieldFilter {
    pub fn eq(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderBy {
    pub field: String,
    #[serde(default)]
    pub direction: SortDirection,
}

/// Структурированный запрос к именованной коллекции документов:
/// конъюнкция предикатов равенства плюс один ключ сортировки.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionQuery {
    /// Имя коллекции передаётся в пути запроса, в теле не сериализуется
    #[serde(skip)]
    pub collection: String,
    #[serde(default)]
    pub filters: Vec<FieldFilter>,
    #[serde(default)]
    pub order_by: Option<OrderBy>,
}

impl CollectionQuery {
    pub fn collection(name: impl Into<String>) -> Self {
        Self {
            collection: name.into(),
            filters: Vec::new(),
            order_by: None,
        }
    }

    pub fn where_eq(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.filters.push(FieldFilter::eq(field, value));
        self
    }

    pub fn order_by(mut self, field: impl Into<String>, direction: SortDirection) -> Self {
        self.order_by = Some(OrderBy {
            field: field.into(),
            direction,
        });
        self
    }
}

/// Ответ шлюза: документы в порядке, заданном запросом
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryResponse<T> {
    pub documents: Vec<T>,
}

/// Тело ответа об ошибке, общее для всех эндпоинтов
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_query_body_shape() {
        let query = CollectionQuery::collection("rentals")
            .where_eq("shopId", "s-1")
            .order_by("endDate", SortDirection::Asc);

        let body = serde_json::to_value(&query).unwrap();
        assert_eq!(
            body,
            json!({
                "filters": [{ "field": "shopId", "value": "s-1" }],
                "orderBy": { "field": "endDate", "direction": "asc" }
            })
        );
    }

    #[test]
    fn test_query_body_defaults() {
        let query: CollectionQuery = serde_json::from_value(json!({})).unwrap();
        assert!(query.filters.is_empty());
        assert_eq!(query.order_by, None);

        let order: OrderBy = serde_json::from_value(json!({ "field": "endDate" })).unwrap();
        assert_eq!(order.direction, SortDirection::Asc);
    }
}
