use contracts::domain::a001_shop::ShopDto;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::session::RentalsReportSession;
use super::view_model::{render_body, ReportBody};
use crate::domain::a002_rental::HttpRentalGateway;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::data_table::DataTable;

/// Отчёт по завершённым прокатам магазина.
///
/// Магазин передаётся явно. Загрузка стартует один раз при монтировании;
/// смена магазина означает новое монтирование (см. `RentalsReportPage`).
#[component]
pub fn RentalsReport(shop: Option<ShopDto>) -> impl IntoView {
    let session = match RentalsReportSession::new(HttpRentalGateway::new(), shop) {
        Ok(session) => session,
        Err(e) => {
            log::warn!("Rentals report not started: {}", e);
            return view! { <div class="rentals-report__error">{e.to_string()}</div> }.into_any();
        }
    };

    let state = RwSignal::new(session.initial_state());

    let guard = session.guard();
    on_cleanup(move || guard.cancel());

    spawn_local(session.run(move |next| {
        state.update(|s| {
            s.settle(next);
        });
    }));

    view! {
        <div class="rentals-report">
            {move || state.with(|s| match render_body(s) {
                ReportBody::LoadingIndicator => {
                    view! { <div class="rentals-report__loading">"Loading"</div> }.into_any()
                }
                ReportBody::Message(message) => {
                    view! { <div class="rentals-report__error">{message}</div> }.into_any()
                }
                ReportBody::Table(config) => view! { <DataTable config=config /> }.into_any(),
            })}
        </div>
    }
    .into_any()
}

/// Страница отчёта: читает активный магазин из контекста и
/// перемонтирует отчёт только при смене id магазина
#[component]
pub fn RentalsReportPage() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let shop_id = ctx.active_shop_id();

    view! {
        <div class="page">
            <div class="page__header">
                <h2 class="page__title">"Completed rentals"</h2>
                <span class="page__subtitle">
                    {move || ctx.active_shop.with(|s| s.as_ref().map(|s| s.name.clone()).unwrap_or_default())}
                </span>
            </div>
            <div class="page__content">
                {move || {
                    if !ctx.shops_loaded.get() {
                        return view! { <div class="rentals-report__loading">"Loading"</div> }.into_any();
                    }
                    if let Some(error) = ctx.shops_error.get() {
                        return view! { <div class="rentals-report__error">{error}</div> }.into_any();
                    }
                    let _ = shop_id.get();
                    let shop = ctx.active_shop.get_untracked();
                    view! { <RentalsReport shop=shop /> }.into_any()
                }}
            </div>
        </div>
    }
}
