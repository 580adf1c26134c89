//! Состояние загрузки удалённых данных.
//!
//! `Loading` - начальное состояние; `Fetched` и `Error` - терминальные.
//! Обратного перехода в `Loading` нет: новая загрузка означает новый экземпляр.

use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum RemoteData<T> {
    #[default]
    Loading,
    Fetched(T),
    Error(String),
}

impl<T> RemoteData<T> {
    pub fn from_result<E: Display>(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => RemoteData::Fetched(value),
            Err(e) => RemoteData::Error(e.to_string()),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, RemoteData::Loading)
    }

    pub fn is_settled(&self) -> bool {
        !self.is_loading()
    }

    /// Единственный допустимый переход: из `Loading` в терминальное состояние.
    /// Возвращает `false`, если состояние уже терминальное или `next` - это `Loading`.
    pub fn settle(&mut self, next: RemoteData<T>) -> bool {
        if self.is_settled() || next.is_loading() {
            return false;
        }
        *self = next;
        true
    }
}
