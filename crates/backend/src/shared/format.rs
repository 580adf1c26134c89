/// Группирует разряды числа по три, вставляя разделитель
///
/// # Примеры
/// ```
/// use backend::shared::format::group_digits;
/// assert_eq!(group_digits(1234567, '.'), "1.234.567");
/// assert_eq!(group_digits(42, ' '), "42");
/// ```
pub fn group_digits(n: usize, separator: char) -> String {
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}

/// Размер тела ответа для журнала запросов: байты до 10 КБ, дальше КБ/МБ
pub fn format_size(bytes: usize) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;

    if bytes < 10 * 1024 {
        format!("{} B", group_digits(bytes, '.'))
    } else if (bytes as f64) < MB {
        format!("{:.1} KB", bytes as f64 / KB)
    } else {
        format!("{:.1} MB", bytes as f64 / MB)
    }
}
