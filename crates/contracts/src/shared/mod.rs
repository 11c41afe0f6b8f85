pub mod api_error;
pub mod date_format;
pub mod list_query;
pub mod selector_chain;
