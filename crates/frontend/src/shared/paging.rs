//! Клиентская пагинация: расчёт количества страниц и диапазона строк

use std::ops::Range;

/// Количество страниц. Пустой набор строк даёт 0 страниц.
pub fn page_count(total_rows: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total_rows.div_ceil(page_size)
}

/// Номер страницы (с нуля), ограниченный последней существующей страницей
pub fn clamp_page(page: usize, total_rows: usize, page_size: usize) -> usize {
    page.min(page_count(total_rows, page_size).saturating_sub(1))
}

/// Диапазон индексов строк на странице, обрезанный по количеству строк
pub fn page_range(total_rows: usize, page_size: usize, page: usize) -> Range<usize> {
    if page_size == 0 {
        return 0..0;
    }
    let page = clamp_page(page, total_rows, page_size);
    let start = (page * page_size).min(total_rows);
    let end = (start + page_size).min(total_rows);
    start..end
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(45, 20), 3);
        assert_eq!(page_count(40, 20), 2);
        assert_eq!(page_count(0, 20), 0);
        assert_eq!(page_count(3, 0), 0);
    }

    #[test]
    fn test_page_ranges_of_45_rows() {
        let sizes: Vec<usize> = (0..page_count(45, 20))
            .map(|p| page_range(45, 20, p).len())
            .collect();
        assert_eq!(sizes, vec![20, 20, 5]);
        assert_eq!(page_range(45, 20, 2), 40..45);
    }

    #[test]
    fn test_page_past_end_is_clamped() {
        assert_eq!(clamp_page(9, 45, 20), 2);
        assert_eq!(page_range(45, 20, 9), 40..45);
        assert_eq!(page_range(0, 20, 3), 0..0);
    }
}
