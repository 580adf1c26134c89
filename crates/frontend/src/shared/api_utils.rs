//! Адрес backend-а для запросов из браузера

/// Порт, на котором слушает backend
pub const API_PORT: u16 = 3000;

/// Базовый адрес API: протокол и хост текущей страницы, порт backend-а.
///
/// Вне браузера (нет `window`) возвращает пустую строку, и запросы
/// уходят по относительному пути.
pub fn api_base() -> String {
    let Some(window) = web_sys::window() else {
        return String::new();
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    backend_origin(&protocol, &hostname)
}

fn backend_origin(protocol: &str, hostname: &str) -> String {
    format!("{}//{}:{}", protocol, hostname, API_PORT)
}

fn join_path(base: &str, path: &str) -> String {
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}

/// Полный URL для пути вида `/api/...`
pub fn api_url(path: &str) -> String {
    join_path(&api_base(), path)
}
