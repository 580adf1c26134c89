pub mod api;
pub mod gateway;

pub use api::HttpRentalGateway;
pub use gateway::{FetchError, RentalGateway};
