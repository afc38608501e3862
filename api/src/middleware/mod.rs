pub mod cors;
pub mod error_handler;
pub mod validation;

pub use cors::create_cors;
pub use error_handler::ErrorResponder;
pub use validation::{request_input, request_input_with_body, validate};
