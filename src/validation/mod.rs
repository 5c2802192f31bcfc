pub mod errors;
pub mod schema;
pub mod validators;

pub use errors::FieldErrors;
pub use schema::{ACCEPT_MESSAGE, FieldRule, FormSchema, PASSWORD_MESSAGE};
pub use validators::{ValidationError, Validator, run_validators};
