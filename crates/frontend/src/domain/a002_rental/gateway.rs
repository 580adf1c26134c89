use std::rc::Rc;

use async_trait::async_trait;
use contracts::domain::a002_rental::RentalDto;
use contracts::shared::query::CollectionQuery;

/// Отказ шлюза: запрос не выполнен, причина в `message`
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct FetchError {
    pub message: String,
}

impl FetchError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Шлюз запросов к коллекции прокатов.
///
/// Возвращает документы в порядке, заданном `query.order_by`.
/// В браузере всё однопоточное, поэтому futures не обязаны быть `Send`.
#[async_trait(?Send)]
pub trait RentalGateway {
    async fn query(&self, query: &CollectionQuery) -> Result<Vec<RentalDto>, FetchError>;
}

#[async_trait(?Send)]
impl<G: RentalGateway + ?Sized> RentalGateway for Rc<G> {
    async fn query(&self, query: &CollectionQuery) -> Result<Vec<RentalDto>, FetchError> {
        (**self).query(query).await
    }
}
