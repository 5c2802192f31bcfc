pub mod config;
pub mod core;
pub mod error;
pub mod runtime;
pub mod state;
pub mod submit;
pub mod terminal;
pub mod ui;
pub mod validation;

pub use crate::core::form_event;
pub use crate::core::value;

pub use error::{AppError, FormError};
pub use state::FormController;
pub use submit::SubmissionOutcome;
pub use ui::view::RenderView;
