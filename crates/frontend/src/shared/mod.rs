pub mod api_utils;
pub mod components;
pub mod date_utils;
pub mod number_format;
pub mod paging;
pub mod remote_data;
