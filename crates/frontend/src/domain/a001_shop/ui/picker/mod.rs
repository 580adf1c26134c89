use leptos::logging::log;
use leptos::prelude::*;

use crate::layout::global_context::AppGlobalContext;

/// Выбор активного магазина в шапке приложения
#[component]
pub fn ShopPicker() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let selected_id = move || {
        ctx.active_shop
            .with(|s| s.as_ref().map(|s| s.id.clone()).unwrap_or_default())
    };

    view! {
        <label class="shop-picker">
            <span class="shop-picker__label">"Shop"</span>
            <select
                class="shop-picker__select"
                disabled=move || ctx.shops.with(|s| s.is_empty())
                on:change=move |ev| {
                    let shop_id = event_target_value(&ev);
                    log!("Shop picker: {}", shop_id);
                    ctx.select_shop(&shop_id);
                }
                prop:value=selected_id
            >
                {move || {
                    ctx.shops
                        .get()
                        .into_iter()
                        .map(|shop| {
                            let id = shop.id.clone();
                            view! {
                                <option value=shop.id selected=move || selected_id() == id>
                                    {shop.name}
                                </option>
                            }
                        })
                        .collect_view()
                }}
            </select>
        </label>
    }
}
