//! TopHeader - верхняя панель приложения: название и выбор магазина

use crate::domain::a001_shop::ui::picker::ShopPicker;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <span class="top-header__title">"Rental Desk"</span>
            </div>

            <div class="top-header__actions">
                <ShopPicker />
            </div>
        </div>
    }
}
