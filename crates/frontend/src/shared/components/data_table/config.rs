//! Описание таблицы: строки, колонки и формат ячеек

use contracts::shared::accessor::resolve;
use serde_json::Value;

use crate::shared::date_utils::format_iso_date;
use crate::shared::number_format::format_money;

/// Текст пустой ячейки
pub const EMPTY_CELL: &str = "—";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellFormat {
    #[default]
    Text,
    /// DD.MM.YYYY
    Date,
    /// 2 знака, разделитель тысяч
    Money,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDef {
    pub header: &'static str,
    /// Точечный путь к значению в строке, например `charge.amount`
    pub accessor: &'static str,
    pub format: CellFormat,
}

impl ColumnDef {
    pub fn new(header: &'static str, accessor: &'static str) -> Self {
        Self {
            header,
            accessor,
            format: CellFormat::Text,
        }
    }

    pub fn with_format(mut self, format: CellFormat) -> Self {
        self.format = format;
        self
    }

    /// Текст ячейки для строки
    pub fn cell_text(&self, row: &Value) -> String {
        match resolve(row, self.accessor) {
            None | Some(Value::Null) => EMPTY_CELL.to_string(),
            Some(value) => format_value(value, self.format),
        }
    }
}

fn format_value(value: &Value, format: CellFormat) -> String {
    match (format, value) {
        (CellFormat::Money, Value::Number(n)) => match n.as_f64() {
            Some(amount) => format_money(amount),
            None => n.to_string(),
        },
        (CellFormat::Date, Value::String(s)) => format_iso_date(s),
        (_, Value::String(s)) => s.clone(),
        (_, other) => other.to_string(),
    }
}

/// Всё, что нужно таблице для отрисовки
#[derive(Debug, Clone, PartialEq)]
pub struct TableConfig {
    pub rows: Vec<Value>,
    pub columns: Vec<ColumnDef>,
    pub default_page_size: usize,
}
