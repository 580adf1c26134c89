pub mod aggregate;

pub use aggregate::ShopDto;
