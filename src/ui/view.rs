use crate::core::value::fields;
use crate::state::FormController;
use crate::submit::SubmissionOutcome;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutcomeView {
    Success(String),
    Failure(String),
}

/// Everything a front end needs to draw the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderView {
    pub password: String,
    pub password_error: String,
    pub accept: bool,
    pub accept_error: String,
    pub submit_enabled: bool,
    pub outcome: Option<OutcomeView>,
}

impl RenderView {
    pub fn from_controller(form: &FormController) -> Self {
        let outcome = match form.outcome() {
            SubmissionOutcome::Idle => None,
            SubmissionOutcome::Success(payload) => Some(OutcomeView::Success(payload.clone())),
            SubmissionOutcome::Failure(details) => Some(OutcomeView::Failure(details.clone())),
        };

        Self {
            password: form.values().password.clone(),
            password_error: form.error(fields::PASSWORD).to_string(),
            accept: form.values().accept,
            accept_error: form.error(fields::ACCEPT).to_string(),
            submit_enabled: form.can_submit(),
            outcome,
        }
    }
}
