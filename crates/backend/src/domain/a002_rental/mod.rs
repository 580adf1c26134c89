pub mod query_plan;
pub mod repository;
