mod app_state;
pub mod focus;
mod form_state;
mod submission;
mod validation_runtime;

pub use app_state::AppState;
pub use focus::{FocusState, FocusTarget};
pub use form_state::FormController;
pub use validation_runtime::{ValidationQueue, ValidationResult, ValidationTicket};
