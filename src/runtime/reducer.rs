use crate::error::FormError;
use crate::runtime::effect::Effect;
use crate::runtime::intent::Intent;
use crate::state::{AppState, FocusTarget};
use crate::terminal::{KeyCode, KeyEvent, KeyModifiers};

pub struct Reducer;

impl Reducer {
    pub fn reduce(state: &mut AppState, intent: Intent) -> Vec<Effect> {
        match intent {
            Intent::Exit => {
                state.request_exit();
                vec![]
            }
            Intent::NextFocus => {
                state.focus.next();
                vec![Effect::RequestRender]
            }
            Intent::PrevFocus => {
                state.focus.prev();
                vec![Effect::RequestRender]
            }
            Intent::Activate => match state.activate_focused() {
                Some(request) => vec![Effect::Submit(request), Effect::RequestRender],
                None => vec![Effect::RequestRender],
            },
            Intent::InputKey(key) => dispatch_key(state, key),
            Intent::Tick => vec![],
        }
    }
}

fn dispatch_key(state: &mut AppState, key: KeyEvent) -> Vec<Effect> {
    if key.modifiers.contains(KeyModifiers::CONTROL) || key.modifiers.contains(KeyModifiers::ALT)
    {
        return vec![];
    }

    let changed = match (state.focus.current(), key.code) {
        (FocusTarget::Password, KeyCode::Char(ch)) => Some(state.push_password_char(ch)),
        (FocusTarget::Password, KeyCode::Backspace) => state.pop_password_char(),
        (FocusTarget::Accept, KeyCode::Char(' ')) => Some(state.toggle_accept()),
        _ => None,
    };

    match changed {
        Some(result) => {
            log_rejected(result);
            vec![Effect::RequestRender]
        }
        None => vec![],
    }
}

fn log_rejected(result: Result<u64, FormError>) {
    if let Err(err) = result {
        tracing::warn!(error = %err, "field change rejected");
    }
}

#[cfg(test)]
mod tests {
    use super::Reducer;
    use crate::runtime::effect::Effect;
    use crate::runtime::intent::Intent;
    use crate::state::{AppState, FocusTarget, FormController};
    use crate::terminal::{KeyCode, KeyEvent};
    use crate::validation::PASSWORD_MESSAGE;

    fn state() -> AppState {
        AppState::new(FormController::with_standard_schema("http://localhost/submit"))
    }

    fn type_text(state: &mut AppState, text: &str) {
        for ch in text.chars() {
            Reducer::reduce(state, Intent::InputKey(KeyEvent::plain(KeyCode::Char(ch))));
        }
    }

    #[test]
    fn typing_updates_password_and_error() {
        let mut state = state();
        type_text(&mut state, "ab1@");
        assert_eq!(state.form.values().password, "ab1@");
        assert_eq!(state.form.error("password"), PASSWORD_MESSAGE);

        type_text(&mut state, "cdef");
        assert_eq!(state.form.error("password"), "");

        Reducer::reduce(&mut state, Intent::InputKey(KeyEvent::plain(KeyCode::Backspace)));
        assert_eq!(state.form.values().password, "ab1@cde");
        assert_eq!(state.form.error("password"), PASSWORD_MESSAGE);
    }

    #[test]
    fn backspace_on_empty_password_does_nothing() {
        let mut state = state();
        let effects =
            Reducer::reduce(&mut state, Intent::InputKey(KeyEvent::plain(KeyCode::Backspace)));
        assert!(effects.is_empty());
        assert!(!state.form.validation_pending());
    }

    #[test]
    fn space_toggles_accept_when_focused() {
        let mut state = state();
        Reducer::reduce(&mut state, Intent::NextFocus);
        assert_eq!(state.focus.current(), FocusTarget::Accept);

        Reducer::reduce(&mut state, Intent::InputKey(KeyEvent::plain(KeyCode::Char(' '))));
        assert!(state.form.values().accept);
        Reducer::reduce(&mut state, Intent::InputKey(KeyEvent::plain(KeyCode::Char(' '))));
        assert!(!state.form.values().accept);
        assert_eq!(state.form.error("accept"), "Terms must be accepted");
    }

    #[test]
    fn ctrl_chars_are_not_typed() {
        let mut state = state();
        Reducer::reduce(
            &mut state,
            Intent::InputKey(KeyEvent::ctrl(KeyCode::Char('x'))),
        );
        assert_eq!(state.form.values().password, "");
    }

    #[test]
    fn activate_on_submit_emits_request_only_when_enabled() {
        let mut state = state();
        type_text(&mut state, "Abcdef1@");
        Reducer::reduce(&mut state, Intent::NextFocus);
        Reducer::reduce(&mut state, Intent::InputKey(KeyEvent::plain(KeyCode::Char(' '))));
        Reducer::reduce(&mut state, Intent::NextFocus);
        assert_eq!(state.focus.current(), FocusTarget::Submit);

        let effects = Reducer::reduce(&mut state, Intent::Activate);
        assert_eq!(effects, vec![Effect::RequestRender]);

        state.form.run_pending_validations();
        let effects = Reducer::reduce(&mut state, Intent::Activate);
        assert!(matches!(effects.first(), Some(Effect::Submit(request)) if request.run_id == 1));
    }

    #[test]
    fn activate_on_field_moves_focus() {
        let mut state = state();
        Reducer::reduce(&mut state, Intent::Activate);
        assert_eq!(state.focus.current(), FocusTarget::Accept);
    }

    #[test]
    fn exit_sets_flag() {
        let mut state = state();
        Reducer::reduce(&mut state, Intent::Exit);
        assert!(state.should_exit());
    }
}
