//! DataTable - таблица с клиентской пагинацией поверх thaw `Table`
//!
//! ```rust,ignore
//! let config = TableConfig { rows, columns, default_page_size: 20 };
//! view! { <DataTable config=config /> }
//! ```

pub mod config;

pub use config::{CellFormat, ColumnDef, TableConfig, EMPTY_CELL};

use leptos::prelude::*;
use thaw::*;

use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::paging::{clamp_page, page_count, page_range};

/// Варианты размера страницы в селекторе
pub const PAGE_SIZE_OPTIONS: [usize; 6] = [5, 10, 20, 25, 50, 100];

/// Варианты размера страницы; размер по умолчанию добавляется, если его нет в списке
pub fn page_size_options(default_page_size: usize) -> Vec<usize> {
    let mut options = PAGE_SIZE_OPTIONS.to_vec();
    if default_page_size > 0 && !options.contains(&default_page_size) {
        options.push(default_page_size);
        options.sort_unstable();
    }
    options
}

#[component]
pub fn DataTable(config: TableConfig) -> impl IntoView {
    let TableConfig {
        rows,
        columns,
        default_page_size,
    } = config;

    let total_rows = rows.len();
    let size_options = page_size_options(default_page_size);
    let rows = StoredValue::new(rows);
    let columns = StoredValue::new(columns);

    let page = RwSignal::new(0usize);
    let page_size = RwSignal::new(default_page_size.max(1));
    let total_pages = Signal::derive(move || page_count(total_rows, page_size.get()));

    let on_page_change = Callback::new(move |next: usize| {
        page.set(clamp_page(next, total_rows, page_size.get_untracked()));
    });
    let on_page_size_change = Callback::new(move |size: usize| {
        page_size.set(size.max(1));
        page.set(0);
    });

    let header_cells = move || {
        columns.with_value(|cols| {
            cols.iter()
                .map(|col| {
                    let header: &'static str = col.header;
                    view! { <TableHeaderCell resizable=false>{header}</TableHeaderCell> }
                })
                .collect_view()
        })
    };

    let body_rows = move || {
        let range = page_range(total_rows, page_size.get(), page.get());
        let offset = range.start;
        rows.with_value(|rows| {
            columns.with_value(|cols| {
                rows[range]
                    .iter()
                    .enumerate()
                    .map(|(i, row)| {
                        let stripe = if (offset + i) % 2 == 1 {
                            "data-table__row data-table__row--odd"
                        } else {
                            "data-table__row"
                        };
                        let cells = cols
                            .iter()
                            .map(|col| {
                                let text = col.cell_text(row);
                                view! {
                                    <TableCell>
                                        <TableCellLayout truncate=true>{text}</TableCellLayout>
                                    </TableCell>
                                }
                            })
                            .collect_view();
                        view! { <TableRow class=stripe>{cells}</TableRow> }
                    })
                    .collect_view()
            })
        })
    };

    view! {
        <div class="data-table">
            <Table>
                <TableHeader>
                    <TableRow>{header_cells}</TableRow>
                </TableHeader>
                <TableBody>{body_rows}</TableBody>
            </Table>
            <PaginationControls
                current_page=page
                total_pages=total_pages
                total_count=total_rows
                page_size=page_size
                on_page_change=on_page_change
                on_page_size_change=on_page_size_change
                page_size_options=size_options
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_size_options_contain_default() {
        assert_eq!(page_size_options(20), vec![5, 10, 20, 25, 50, 100]);
        assert_eq!(page_size_options(15), vec![5, 10, 15, 20, 25, 50, 100]);
    }
}
