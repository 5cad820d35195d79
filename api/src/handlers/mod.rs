pub mod error;

pub use error::{domain_error_response, json_error_handler};
