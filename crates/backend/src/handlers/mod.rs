pub mod a001_shop;
pub mod collections;
