//! Что показывает отчёт для каждого состояния загрузки

use contracts::domain::a002_rental::{fields, RentalDto};
use serde_json::Value;

use super::session::RentalsLoadState;
use crate::shared::components::data_table::{CellFormat, ColumnDef, TableConfig};
use crate::shared::remote_data::RemoteData;

pub const REPORT_PAGE_SIZE: usize = 20;

pub fn report_columns() -> Vec<ColumnDef> {
    vec![
        ColumnDef::new("First Name", fields::FIRST_NAME),
        ColumnDef::new("Last Name", fields::LAST_NAME),
        ColumnDef::new("Date", fields::END_DATE).with_format(CellFormat::Date),
        ColumnDef::new("Amount", fields::CHARGE_AMOUNT).with_format(CellFormat::Money),
    ]
}

pub fn report_table(rentals: &[RentalDto]) -> TableConfig {
    TableConfig {
        rows: rentals
            .iter()
            .map(|r| serde_json::to_value(r).unwrap_or(Value::Null))
            .collect(),
        columns: report_columns(),
        default_page_size: REPORT_PAGE_SIZE,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ReportBody {
    LoadingIndicator,
    Message(String),
    Table(TableConfig),
}

/// Чистая функция состояния: ничего не меняет и не запрашивает
pub fn render_body(state: &RentalsLoadState) -> ReportBody {
    match state {
        RemoteData::Loading => ReportBody::LoadingIndicator,
        RemoteData::Error(message) => ReportBody::Message(message.clone()),
        RemoteData::Fetched(rentals) => ReportBody::Table(report_table(rentals)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::paging::{page_count, page_range};
    use chrono::{Duration, TimeZone, Utc};
    use contracts::domain::a002_rental::{Charge, RentalState, ResponsiblePerson};

    fn rentals(n: usize) -> Vec<RentalDto> {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap();
        (0..n)
            .map(|i| RentalDto {
                id: format!("r-{}", i),
                shop_id: "shop-1".into(),
                rental_state: RentalState::Completed,
                responsible_person: ResponsiblePerson {
                    first_name: format!("Name{}", i),
                    last_name: "Doe".into(),
                },
                end_date: start + Duration::days(i as i64),
                charge: Charge {
                    amount: 1500.0,
                    currency: None,
                },
            })
            .collect()
    }

    #[test]
    fn test_loading_renders_indicator() {
        assert_eq!(render_body(&RemoteData::Loading), ReportBody::LoadingIndicator);
    }

    #[test]
    fn test_error_renders_message() {
        let state = RemoteData::Error("X".to_string());
        assert_eq!(render_body(&state), ReportBody::Message("X".to_string()));
    }

    #[test]
    fn test_fetched_renders_table_with_four_columns() {
        let ReportBody::Table(table) = render_body(&RemoteData::Fetched(rentals(3))) else {
            panic!("expected a table");
        };

        let headers: Vec<&str> = table.columns.iter().map(|c| c.header).collect();
        assert_eq!(headers, vec!["First Name", "Last Name", "Date", "Amount"]);
        let accessors: Vec<&str> = table.columns.iter().map(|c| c.accessor).collect();
        assert_eq!(
            accessors,
            vec![
                "responsiblePerson.firstName",
                "responsiblePerson.lastName",
                "endDate",
                "charge.amount"
            ]
        );

        assert_eq!(table.rows.len(), 3);
        let first_row: Vec<String> = table.columns.iter().map(|c| c.cell_text(&table.rows[0])).collect();
        assert_eq!(first_row, vec!["Name0", "Doe", "01.01.2024", "1 500.00"]);
    }

    #[test]
    fn test_rows_keep_query_order() {
        let mut fetched = rentals(3);
        fetched.reverse();
        let ReportBody::Table(table) = render_body(&RemoteData::Fetched(fetched)) else {
            panic!("expected a table");
        };
        let names: Vec<String> = table
            .rows
            .iter()
            .map(|r| table.columns[0].cell_text(r))
            .collect();
        assert_eq!(names, vec!["Name2", "Name1", "Name0"]);
    }

    #[test]
    fn test_empty_result_renders_empty_table() {
        let ReportBody::Table(table) = render_body(&RemoteData::Fetched(vec![])) else {
            panic!("expected a table");
        };
        assert!(table.rows.is_empty());
        assert_eq!(table.columns.len(), 4);
    }

    #[test]
    fn test_45_rows_paginate_by_20() {
        let ReportBody::Table(table) = render_body(&RemoteData::Fetched(rentals(45))) else {
            panic!("expected a table");
        };
        assert_eq!(table.default_page_size, 20);

        let total = table.rows.len();
        let pages: Vec<usize> = (0..page_count(total, table.default_page_size))
            .map(|p| page_range(total, table.default_page_size, p).len())
            .collect();
        assert_eq!(pages, vec![20, 20, 5]);
    }

    #[test]
    fn test_render_is_repeatable() {
        let state = RemoteData::Fetched(rentals(2));
        assert_eq!(render_body(&state), render_body(&state));
        assert_eq!(state, RemoteData::Fetched(rentals(2)));
    }
}
