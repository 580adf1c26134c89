pub mod data_table;
pub mod pagination_controls;
