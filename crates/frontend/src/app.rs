use crate::dashboards::d400_rentals_report::RentalsReportPage;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the AppGlobalContext store to the whole app via context.
    let ctx = AppGlobalContext::new();
    provide_context(ctx);
    ctx.load_shops();

    view! {
        <Shell>
            <RentalsReportPage />
        </Shell>
    }
}
