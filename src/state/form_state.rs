use crate::core::value::FormValues;
use crate::state::validation_runtime::ValidationQueue;
use crate::submit::SubmissionOutcome;
use crate::validation::{FieldErrors, FormSchema};

/// Holds the form's values, per-field errors, the submit-enabled flag and
/// the outcome of the latest submission.
pub struct FormController {
    pub(super) schema: FormSchema,
    pub(super) endpoint: String,
    pub(super) values: FormValues,
    pub(super) errors: FieldErrors,
    pub(super) enabled: bool,
    pub(super) validation: ValidationQueue,
    pub(super) outcome: SubmissionOutcome,
    pub(super) submit_runs: u64,
}

impl FormController {
    pub fn new(schema: FormSchema, endpoint: impl Into<String>) -> Self {
        let errors = FieldErrors::for_fields(schema.field_names());
        Self {
            schema,
            endpoint: endpoint.into(),
            values: FormValues::default(),
            errors,
            enabled: false,
            validation: ValidationQueue::default(),
            outcome: SubmissionOutcome::Idle,
            submit_runs: 0,
        }
    }

    pub fn with_standard_schema(endpoint: impl Into<String>) -> Self {
        Self::new(FormSchema::standard(), endpoint)
    }

    pub fn schema(&self) -> &FormSchema {
        &self.schema
    }

    pub fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, name: &str) -> &str {
        self.errors.get(name)
    }

    /// Result of the most recent whole-form validation that was applied.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn outcome(&self) -> &SubmissionOutcome {
        &self.outcome
    }
}
