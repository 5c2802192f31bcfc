pub mod form_event;
pub mod value;

pub use form_event::{FieldChange, InputKind};
pub use value::{FormValues, Value, fields};
