use super::FormController;
use crate::core::form_event::FieldChange;
use crate::core::value::{FormValues, Value, fields};
use crate::error::FormError;
use crate::validation::FormSchema;
use std::collections::VecDeque;

/// A deferred whole-form validation, keyed to the values that triggered it.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationTicket {
    pub seq: u64,
    pub values: FormValues,
}

impl ValidationTicket {
    pub fn evaluate(&self, schema: &FormSchema) -> ValidationResult {
        ValidationResult {
            seq: self.seq,
            valid: schema.validate_all(&self.values),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationResult {
    pub seq: u64,
    pub valid: bool,
}

#[derive(Debug, Default)]
pub struct ValidationQueue {
    issued: u64,
    applied: u64,
    pending: VecDeque<ValidationTicket>,
}

impl ValidationQueue {
    fn issue(&mut self, values: FormValues) -> ValidationTicket {
        self.issued = self.issued.saturating_add(1);
        let ticket = ValidationTicket {
            seq: self.issued,
            values,
        };
        self.pending.push_back(ticket.clone());
        ticket
    }

    fn is_latest(&self, seq: u64) -> bool {
        seq == self.issued
    }
}

impl FormController {
    /// Applies a field change: stores the value, re-validates that field and
    /// queues a whole-form validation. Returns the queued ticket's sequence.
    pub fn handle_change(&mut self, change: FieldChange) -> Result<u64, FormError> {
        let value = change.field_value();
        self.set_field(change.name.as_str(), value)
    }

    pub fn set_field(&mut self, name: &str, value: impl Into<Value>) -> Result<u64, FormError> {
        let value = value.into();
        let result = self
            .schema
            .validate_field(name, &value)
            .ok_or_else(|| FormError::UnknownField(name.to_string()))?;

        tracing::debug!(field = name, valid = result.is_ok(), "field changed");
        self.errors.apply(name, result);
        self.store_value(name, value)?;

        Ok(self.request_validation().seq)
    }

    /// Single-field check against the schema without touching state.
    pub fn validate_field(&self, name: &str, value: &Value) -> Result<(), FormError> {
        match self.schema.validate_field(name, value) {
            Some(Ok(())) => Ok(()),
            Some(Err(message)) => Err(FormError::Invalid {
                field: name.to_string(),
                message,
            }),
            None => Err(FormError::UnknownField(name.to_string())),
        }
    }

    pub fn validate_all(&self, values: &FormValues) -> bool {
        self.schema.validate_all(values)
    }

    pub fn request_validation(&mut self) -> ValidationTicket {
        self.validation.issue(self.values.clone())
    }

    pub fn take_pending_validations(&mut self) -> Vec<ValidationTicket> {
        self.validation.pending.drain(..).collect()
    }

    /// Applies `result` only if it belongs to the most recently issued
    /// ticket. Returns whether it was applied.
    pub fn apply_validation(&mut self, result: ValidationResult) -> bool {
        if !self.validation.is_latest(result.seq) {
            tracing::debug!(
                seq = result.seq,
                latest = self.validation.issued,
                "discarding stale validation result"
            );
            return false;
        }
        self.validation.applied = result.seq;
        self.enabled = result.valid;
        true
    }

    /// Evaluates every queued ticket in order. Returns whether the enabled
    /// flag changed.
    pub fn run_pending_validations(&mut self) -> bool {
        let before = self.enabled;
        for ticket in self.take_pending_validations() {
            let result = ticket.evaluate(&self.schema);
            self.apply_validation(result);
        }
        before != self.enabled
    }

    pub fn validation_pending(&self) -> bool {
        self.validation.applied != self.validation.issued
    }

    fn store_value(&mut self, name: &str, value: Value) -> Result<(), FormError> {
        match (name, value) {
            (fields::PASSWORD, Value::Text(text)) => {
                self.values.password = text;
                Ok(())
            }
            (fields::ACCEPT, Value::Bool(flag)) => {
                self.values.accept = flag;
                Ok(())
            }
            (fields::PASSWORD, _) => Err(FormError::ValueType {
                field: name.to_string(),
                expected: "text",
            }),
            (fields::ACCEPT, _) => Err(FormError::ValueType {
                field: name.to_string(),
                expected: "boolean",
            }),
            _ => Err(FormError::UnknownField(name.to_string())),
        }
    }
}
