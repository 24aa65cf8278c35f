pub mod services;
pub mod value_objects;

pub use services::QueryHelper;
pub use value_objects::*;
