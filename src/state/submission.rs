use super::FormController;
use crate::submit::{SubmissionOutcome, SubmitCompletion, SubmitRequest, Transport, execute_request};

impl FormController {
    /// Submission is allowed only when the latest whole-form validation has
    /// been applied and passed.
    pub fn can_submit(&self) -> bool {
        self.enabled && !self.validation_pending()
    }

    /// Clears the previous outcome and builds the request for the current
    /// values. Returns `None` and leaves state untouched when submission is
    /// not allowed. A body that fails to encode is reported as a failure.
    pub fn begin_submit(&mut self) -> Option<SubmitRequest> {
        if !self.can_submit() {
            tracing::debug!(
                enabled = self.enabled,
                pending = self.validation_pending(),
                "submit ignored"
            );
            return None;
        }

        let payload = match self.values.to_json() {
            Ok(payload) => payload,
            Err(err) => {
                tracing::error!(error = %err, "failed to encode form values");
                self.outcome = SubmissionOutcome::Failure(format!("failed to encode form: {err}"));
                return None;
            }
        };

        self.outcome = SubmissionOutcome::Idle;
        self.submit_runs = self.submit_runs.saturating_add(1);
        tracing::info!(run_id = self.submit_runs, endpoint = %self.endpoint, "submitting form");

        Some(SubmitRequest {
            run_id: self.submit_runs,
            url: self.endpoint.clone(),
            payload,
        })
    }

    /// Applies the completion of the most recent submit. Completions of
    /// superseded runs are dropped. Returns whether it was applied.
    pub fn complete_submit(&mut self, completion: SubmitCompletion) -> bool {
        if completion.run_id != self.submit_runs {
            tracing::debug!(
                run_id = completion.run_id,
                latest = self.submit_runs,
                "discarding superseded submission result"
            );
            return false;
        }
        match &completion.outcome {
            SubmissionOutcome::Success(_) => {
                tracing::info!(run_id = completion.run_id, "submission succeeded");
            }
            SubmissionOutcome::Failure(details) => {
                tracing::warn!(run_id = completion.run_id, details = %details, "submission failed");
            }
            SubmissionOutcome::Idle => {}
        }
        self.outcome = completion.outcome;
        true
    }

    /// Submits synchronously through `transport`.
    pub fn submit(&mut self, transport: &dyn Transport) -> Option<&SubmissionOutcome> {
        let request = self.begin_submit()?;
        let completion = execute_request(transport, request);
        self.complete_submit(completion);
        Some(&self.outcome)
    }
}
