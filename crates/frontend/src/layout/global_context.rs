use contracts::domain::a001_shop::ShopDto;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::window;

use crate::domain::a001_shop::api::fetch_shops;

const ACTIVE_SHOP_STORAGE_KEY: &str = "active_shop_id";

/// Глобальное состояние приложения: список магазинов и активный магазин.
///
/// Компоненты отчётов не читают его напрямую: активный магазин
/// передаётся им параметром со страницы-хоста.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub shops: RwSignal<Vec<ShopDto>>,
    pub active_shop: RwSignal<Option<ShopDto>>,
    pub shops_loaded: RwSignal<bool>,
    pub shops_error: RwSignal<Option<String>>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            shops: RwSignal::new(vec![]),
            active_shop: RwSignal::new(None),
            shops_loaded: RwSignal::new(false),
            shops_error: RwSignal::new(None),
        }
    }

    /// Загружает список магазинов и восстанавливает выбранный ранее
    pub fn load_shops(&self) {
        let this = *self;
        spawn_local(async move {
            match fetch_shops().await {
                Ok(shops) => {
                    log::info!("Loaded {} shops", shops.len());
                    this.set_shops(shops);
                }
                Err(e) => {
                    log::error!("Failed to load shops: {}", e);
                    this.shops_error.set(Some(e));
                }
            }
            this.shops_loaded.set(true);
        });
    }

    pub fn set_shops(&self, shops: Vec<ShopDto>) {
        self.apply_shops(shops, load_active_shop_id().as_deref());
    }

    /// Делает магазин активным и запоминает выбор
    pub fn select_shop(&self, shop_id: &str) {
        if let Some(shop) = self.apply_selection(shop_id) {
            save_active_shop_id(&shop.id);
        }
    }

    /// Id активного магазина. Пересчитывается только при смене магазина.
    pub fn active_shop_id(&self) -> Memo<Option<String>> {
        let active_shop = self.active_shop;
        Memo::new(move |_| active_shop.with(|s| s.as_ref().map(|s| s.id.clone())))
    }

    fn apply_shops(&self, shops: Vec<ShopDto>, preferred_id: Option<&str>) {
        let active = pick_active_shop(&shops, preferred_id);
        self.shops.set(shops);
        self.active_shop.set(active);
    }

    /// Меняет активный магазин. Повторный выбор того же магазина и
    /// неизвестный id сигнал не трогают; тогда возвращается `None`.
    fn apply_selection(&self, shop_id: &str) -> Option<ShopDto> {
        let current = self
            .active_shop
            .with_untracked(|s| s.as_ref().map(|s| s.id.clone()));
        if current.as_deref() == Some(shop_id) {
            return None;
        }

        let next = self
            .shops
            .with_untracked(|shops| shops.iter().find(|s| s.id == shop_id).cloned());
        match next {
            Some(shop) => {
                self.active_shop.set(Some(shop.clone()));
                Some(shop)
            }
            None => {
                log::warn!("Shop {} is not in the list", shop_id);
                None
            }
        }
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Сохранённый магазин, если он ещё есть в списке, иначе первый
pub fn pick_active_shop(shops: &[ShopDto], preferred_id: Option<&str>) -> Option<ShopDto> {
    preferred_id
        .and_then(|id| shops.iter().find(|s| s.id == id))
        .or_else(|| shops.first())
        .cloned()
}

fn load_active_shop_id() -> Option<String> {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(ACTIVE_SHOP_STORAGE_KEY).ok().flatten())
}

fn save_active_shop_id(shop_id: &str) {
    if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(ACTIVE_SHOP_STORAGE_KEY, shop_id);
    }
}
