use crate::core::form_event::FieldChange;
use crate::core::value::fields;
use crate::error::FormError;
use crate::state::focus::{FocusState, FocusTarget};
use crate::state::FormController;
use crate::submit::SubmitRequest;
use crate::ui::view::RenderView;

/// Front-end state wrapped around the form: focus and exit request.
pub struct AppState {
    pub form: FormController,
    pub focus: FocusState,
    should_exit: bool,
}

impl AppState {
    pub fn new(form: FormController) -> Self {
        Self {
            form,
            focus: FocusState::default(),
            should_exit: false,
        }
    }

    pub fn should_exit(&self) -> bool {
        self.should_exit
    }

    pub fn request_exit(&mut self) {
        self.should_exit = true;
    }

    pub fn view(&self) -> RenderView {
        RenderView::from_controller(&self.form)
    }

    pub fn push_password_char(&mut self, ch: char) -> Result<u64, FormError> {
        let mut next = self.form.values().password.clone();
        next.push(ch);
        self.form
            .handle_change(FieldChange::password(fields::PASSWORD, next))
    }

    /// `None` when there is nothing to delete.
    pub fn pop_password_char(&mut self) -> Option<Result<u64, FormError>> {
        let mut next = self.form.values().password.clone();
        next.pop()?;
        Some(
            self.form
                .handle_change(FieldChange::password(fields::PASSWORD, next)),
        )
    }

    pub fn toggle_accept(&mut self) -> Result<u64, FormError> {
        let next = !self.form.values().accept;
        self.form
            .handle_change(FieldChange::checkbox(fields::ACCEPT, next))
    }

    /// Enter on a field moves on; on the submit button it starts a submit.
    pub fn activate_focused(&mut self) -> Option<SubmitRequest> {
        match self.focus.current() {
            FocusTarget::Submit => self.form.begin_submit(),
            FocusTarget::Password | FocusTarget::Accept => {
                self.focus.next();
                None
            }
        }
    }
}
