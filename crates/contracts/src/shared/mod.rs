pub mod accessor;
pub mod query;
