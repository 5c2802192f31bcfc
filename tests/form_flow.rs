use std::sync::Arc;
use std::time::{Duration, Instant};
use termsgate::form_event::FieldChange;
use termsgate::submit::{
    SubmitExecutor, Transport, TransportError, TransportResponse,
};
use termsgate::ui::{OutcomeView, RenderView};
use termsgate::validation::{ACCEPT_MESSAGE, PASSWORD_MESSAGE};
use termsgate::{FormController, SubmissionOutcome};

struct Status(u16, &'static str);

impl Transport for Status {
    fn post_json(
        &self,
        _url: &str,
        _body: &serde_json::Value,
    ) -> Result<TransportResponse, TransportError> {
        Ok(TransportResponse::new(self.0, self.1))
    }
}

struct Unreachable;

impl Transport for Unreachable {
    fn post_json(
        &self,
        url: &str,
        _body: &serde_json::Value,
    ) -> Result<TransportResponse, TransportError> {
        Err(TransportError::Network(format!("{url}: connection refused")))
    }
}

fn filled_form() -> FormController {
    let mut form = FormController::with_standard_schema("http://localhost:9/submit");
    form.handle_change(FieldChange::password("password", "Abcdef1@"))
        .expect("password change");
    form.handle_change(FieldChange::checkbox("accept", true))
        .expect("accept change");
    form.run_pending_validations();
    form
}

#[test]
fn enabled_flag_tracks_latest_values() {
    let mut form = filled_form();
    assert!(form.is_enabled());

    form.handle_change(FieldChange::password("password", "short1@"))
        .expect("change");
    form.run_pending_validations();
    assert!(!form.is_enabled());
    assert_eq!(form.error("password"), PASSWORD_MESSAGE);
    assert_eq!(form.error("accept"), "");
}

#[test]
fn unchecking_terms_disables_and_reports() {
    let mut form = filled_form();
    form.handle_change(FieldChange::checkbox("accept", false))
        .expect("change");
    form.run_pending_validations();

    let view = RenderView::from_controller(&form);
    assert!(!view.submit_enabled);
    assert_eq!(view.accept_error, ACCEPT_MESSAGE);
}

#[test]
fn success_then_failure_then_network_error() {
    let mut form = filled_form();

    form.submit(&Status(200, "OK"));
    assert_eq!(form.outcome(), &SubmissionOutcome::Success("OK".to_string()));

    form.submit(&Status(500, "Internal Server Error"));
    assert_eq!(
        form.outcome(),
        &SubmissionOutcome::Failure("HTTP 500: Internal Server Error".to_string())
    );

    form.submit(&Unreachable);
    assert_eq!(
        RenderView::from_controller(&form).outcome,
        Some(OutcomeView::Failure(
            "network error: http://localhost:9/submit: connection refused".to_string()
        ))
    );
    assert!(form.is_enabled());
}

#[test]
fn background_submission_lands_through_executor() {
    let mut form = filled_form();
    let executor = SubmitExecutor::new(Arc::new(Status(201, "created")));

    let request = form.begin_submit().expect("submit enabled");
    assert!(form.outcome().is_idle());
    executor.spawn(request);

    let deadline = Instant::now() + Duration::from_secs(5);
    while form.outcome().is_idle() && Instant::now() < deadline {
        for completion in executor.drain_ready() {
            form.complete_submit(completion);
        }
        std::thread::sleep(Duration::from_millis(5));
    }

    assert_eq!(
        form.outcome(),
        &SubmissionOutcome::Success("created".to_string())
    );
}
