pub mod errors;
pub mod services;

pub use errors::DecodingError;
pub use services::URLHelper;
