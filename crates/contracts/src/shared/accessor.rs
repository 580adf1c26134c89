//! Разрешение точечных путей (`responsiblePerson.firstName`) внутри JSON-документа

use serde_json::Value;

/// Возвращает значение по точечному пути или `None`, если какого-то сегмента нет.
///
/// Сегменты, состоящие из цифр, индексируют массивы.
pub fn resolve<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    if path.is_empty() {
        return Some(value);
    }

    path.split('.').try_fold(value, |current, segment| match current {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    })
}
