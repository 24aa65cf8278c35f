pub mod common;
pub mod page_context;
pub mod query;
pub mod url;
