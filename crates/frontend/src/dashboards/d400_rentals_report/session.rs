//! Одна загрузка отчёта на одно монтирование.
//!
//! `RentalsReportSession` создаётся при монтировании и поглощается в `run`,
//! поэтому второй запрос в рамках того же монтирования выразить нельзя.
//! Запись результата проверяет `MountGuard`: после размонтирования
//! результат отбрасывается.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use contracts::dashboards::d400_rentals_report::completed_rentals_query;
use contracts::domain::a001_shop::ShopDto;
use contracts::domain::a002_rental::RentalDto;
use contracts::shared::query::CollectionQuery;

use crate::domain::a002_rental::RentalGateway;
use crate::shared::remote_data::RemoteData;

pub type RentalsLoadState = RemoteData<Vec<RentalDto>>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReportError {
    #[error("No active shop selected")]
    MissingActiveShop,
}

/// Флаг "компонент ещё смонтирован", общий для компонента и загрузки
#[derive(Debug, Clone)]
pub struct MountGuard(Arc<AtomicBool>);

impl MountGuard {
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    pub fn cancel(&self) {
        self.0.store(false, Ordering::SeqCst);
    }

    pub fn is_mounted(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

impl Default for MountGuard {
    fn default() -> Self {
        Self::new()
    }
}

pub struct RentalsReportSession<G> {
    gateway: G,
    shop: ShopDto,
    guard: MountGuard,
}

impl<G: RentalGateway> RentalsReportSession<G> {
    /// Отчёт без активного магазина не строится
    pub fn new(gateway: G, active_shop: Option<ShopDto>) -> Result<Self, ReportError> {
        let shop = active_shop.ok_or(ReportError::MissingActiveShop)?;
        Ok(Self {
            gateway,
            shop,
            guard: MountGuard::new(),
        })
    }

    pub fn initial_state(&self) -> RentalsLoadState {
        RemoteData::Loading
    }

    pub fn guard(&self) -> MountGuard {
        self.guard.clone()
    }

    pub fn query(&self) -> CollectionQuery {
        completed_rentals_query(&self.shop.id)
    }

    /// Выполняет запрос. `None`, если компонент размонтирован до ответа.
    pub async fn fetch(self) -> Option<RentalsLoadState> {
        let query = self.query();
        let result = self.gateway.query(&query).await;

        if !self.guard.is_mounted() {
            log::debug!(
                "Rentals report for shop {} unmounted before the query settled, result dropped",
                self.shop.id
            );
            return None;
        }

        match &result {
            Ok(rentals) => log::debug!(
                "Fetched {} completed rentals for shop {}",
                rentals.len(),
                self.shop.id
            ),
            Err(e) => log::warn!("Rentals query for shop {} failed: {}", self.shop.id, e),
        }

        Some(RemoteData::from_result(result))
    }

    /// Выполняет запрос и передаёт итоговое состояние в `complete` ровно один раз
    pub async fn run(self, complete: impl FnOnce(RentalsLoadState)) {
        if let Some(state) = self.fetch().await {
            complete(state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_rental::FetchError;
    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};
    use contracts::domain::a002_rental::{Charge, RentalState, ResponsiblePerson};
    use contracts::shared::accessor::resolve;
    use contracts::shared::query::SortDirection;
    use serde_json::Value;
    use std::cell::{Cell, RefCell};
    use std::cmp::Ordering as CmpOrdering;
    use std::rc::Rc;
    use std::time::Duration;

    fn rental(id: &str, shop: &str, state: RentalState, day: u32) -> RentalDto {
        RentalDto {
            id: id.to_string(),
            shop_id: shop.to_string(),
            rental_state: state,
            responsible_person: ResponsiblePerson {
                first_name: format!("First {}", id),
                last_name: format!("Last {}", id),
            },
            end_date: Utc.with_ymd_and_hms(2024, 1, day, 12, 0, 0).unwrap(),
            charge: Charge {
                amount: 10.0 * day as f64,
                currency: Some("EUR".into()),
            },
        }
    }

    fn compare_values(a: Option<&Value>, b: Option<&Value>) -> CmpOrdering {
        match (a, b) {
            (Some(Value::String(a)), Some(Value::String(b))) => a.cmp(b),
            (Some(Value::Number(a)), Some(Value::Number(b))) => a
                .as_f64()
                .partial_cmp(&b.as_f64())
                .unwrap_or(CmpOrdering::Equal),
            _ => CmpOrdering::Equal,
        }
    }

    /// Шлюз поверх списка в памяти, выполняет запрос так же, как backend
    struct InMemoryGateway {
        documents: Vec<RentalDto>,
        calls: Cell<usize>,
        last_query: RefCell<Option<CollectionQuery>>,
    }

    impl InMemoryGateway {
        fn new(documents: Vec<RentalDto>) -> Self {
            Self {
                documents,
                calls: Cell::new(0),
                last_query: RefCell::new(None),
            }
        }
    }

    #[async_trait(?Send)]
    impl RentalGateway for InMemoryGateway {
        async fn query(&self, query: &CollectionQuery) -> Result<Vec<RentalDto>, FetchError> {
            self.calls.set(self.calls.get() + 1);
            *self.last_query.borrow_mut() = Some(query.clone());

            let mut matched: Vec<(Value, RentalDto)> = self
                .documents
                .iter()
                .map(|d| (serde_json::to_value(d).unwrap(), d.clone()))
                .filter(|(json, _)| {
                    query
                        .filters
                        .iter()
                        .all(|f| resolve(json, &f.field) == Some(&f.value))
                })
                .collect();

            if let Some(order) = &query.order_by {
                matched.sort_by(|(a, _), (b, _)| {
                    let ord = compare_values(resolve(a, &order.field), resolve(b, &order.field));
                    match order.direction {
                        SortDirection::Asc => ord,
                        SortDirection::Desc => ord.reverse(),
                    }
                });
            }

            Ok(matched.into_iter().map(|(_, d)| d).collect())
        }
    }

    struct FailingGateway(&'static str);

    #[async_trait(?Send)]
    impl RentalGateway for FailingGateway {
        async fn query(&self, _query: &CollectionQuery) -> Result<Vec<RentalDto>, FetchError> {
            Err(FetchError::new(self.0))
        }
    }

    struct PendingGateway;

    #[async_trait(?Send)]
    impl RentalGateway for PendingGateway {
        async fn query(&self, _query: &CollectionQuery) -> Result<Vec<RentalDto>, FetchError> {
            std::future::pending().await
        }
    }

    /// Размонтирует компонент, пока запрос ещё "в полёте"
    struct UnmountingGateway {
        guard: RefCell<Option<MountGuard>>,
    }

    #[async_trait(?Send)]
    impl RentalGateway for UnmountingGateway {
        async fn query(&self, _query: &CollectionQuery) -> Result<Vec<RentalDto>, FetchError> {
            if let Some(guard) = self.guard.borrow().as_ref() {
                guard.cancel();
            }
            Ok(vec![])
        }
    }

    fn shop(id: &str) -> Option<ShopDto> {
        Some(ShopDto::new(id, "Test shop"))
    }

    async fn run_to_state<G: RentalGateway>(session: RentalsReportSession<G>) -> RentalsLoadState {
        let state = Rc::new(RefCell::new(session.initial_state()));
        let sink = state.clone();
        session
            .run(move |next| {
                sink.borrow_mut().settle(next);
            })
            .await;
        let result = state.borrow().clone();
        result
    }

    #[tokio::test]
    async fn test_fetches_completed_rentals_of_shop_in_end_date_order() {
        let gateway = InMemoryGateway::new(vec![
            rental("r-1", "shop-1", RentalState::Completed, 20),
            rental("r-2", "shop-1", RentalState::Active, 2),
            rental("r-3", "shop-1", RentalState::Completed, 3),
            rental("r-4", "shop-2", RentalState::Completed, 1),
            rental("r-5", "shop-1", RentalState::Completed, 9),
        ]);
        let session = RentalsReportSession::new(gateway, shop("shop-1")).unwrap();

        match run_to_state(session).await {
            RemoteData::Fetched(rows) => {
                let ids: Vec<&str> = rows.iter().map(|r| r.id.as_str()).collect();
                assert_eq!(ids, vec!["r-3", "r-5", "r-1"]);
            }
            other => panic!("expected Fetched, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_issues_report_query() {
        let gateway = Rc::new(InMemoryGateway::new(vec![]));
        let session = RentalsReportSession::new(gateway.clone(), shop("shop-9")).unwrap();
        run_to_state(session).await;

        let issued = gateway.last_query.borrow().clone().unwrap();
        assert_eq!(issued, completed_rentals_query("shop-9"));
        assert_eq!(issued.collection, "rentals");
    }

    #[tokio::test]
    async fn test_gateway_failure_becomes_error_state() {
        let session = RentalsReportSession::new(FailingGateway("X"), shop("shop-1")).unwrap();
        assert_eq!(run_to_state(session).await, RemoteData::Error("X".to_string()));
    }

    #[tokio::test]
    async fn test_empty_result_is_fetched() {
        let gateway = InMemoryGateway::new(vec![rental("r-1", "shop-1", RentalState::Active, 1)]);
        let session = RentalsReportSession::new(gateway, shop("shop-1")).unwrap();
        assert_eq!(run_to_state(session).await, RemoteData::Fetched(vec![]));
    }

    #[tokio::test]
    async fn test_pending_query_stays_loading() {
        let session = RentalsReportSession::new(PendingGateway, shop("shop-1")).unwrap();
        let state = Rc::new(RefCell::new(session.initial_state()));
        let sink = state.clone();

        let outcome = tokio::time::timeout(
            Duration::from_millis(50),
            session.run(move |next| *sink.borrow_mut() = next),
        )
        .await;

        assert!(outcome.is_err());
        assert!(state.borrow().is_loading());
    }

    #[tokio::test]
    async fn test_one_query_per_mount() {
        let gateway = Rc::new(InMemoryGateway::new(vec![rental(
            "r-1",
            "shop-1",
            RentalState::Completed,
            1,
        )]));
        let session = RentalsReportSession::new(gateway.clone(), shop("shop-1")).unwrap();
        let writes = Rc::new(Cell::new(0));
        let counter = writes.clone();

        session.run(move |_| counter.set(counter.get() + 1)).await;

        assert_eq!(gateway.calls.get(), 1);
        assert_eq!(writes.get(), 1);
    }

    #[tokio::test]
    async fn test_completion_after_unmount_is_dropped() {
        let gateway = Rc::new(UnmountingGateway {
            guard: RefCell::new(None),
        });
        let session = RentalsReportSession::new(gateway.clone(), shop("shop-1")).unwrap();
        *gateway.guard.borrow_mut() = Some(session.guard());

        let written = Rc::new(Cell::new(false));
        let flag = written.clone();
        session.run(move |_| flag.set(true)).await;

        assert!(!written.get());
    }

    #[tokio::test]
    async fn test_cancelled_guard_drops_fetch_result() {
        let session = RentalsReportSession::new(FailingGateway("late"), shop("shop-1")).unwrap();
        session.guard().cancel();
        assert_eq!(session.fetch().await, None);
    }

    #[test]
    fn test_missing_shop_issues_no_query() {
        let gateway = Rc::new(InMemoryGateway::new(vec![]));
        let result = RentalsReportSession::new(gateway.clone(), None);

        assert!(matches!(result, Err(ReportError::MissingActiveShop)));
        assert_eq!(gateway.calls.get(), 0);
    }
}
