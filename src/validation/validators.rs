use crate::core::value::Value;
use regex::Regex;

pub type ValidationError = String;
pub type Validator = Box<dyn Fn(&Value) -> Result<(), ValidationError> + Send + Sync>;

/// Run a list of validators against `value`, returning the first error.
pub fn run_validators(validators: &[Validator], value: &Value) -> Result<(), ValidationError> {
    for validator in validators {
        validator(value)?;
    }
    Ok(())
}

/// Text must be present and non-empty. Booleans count as present.
pub fn required(message: impl Into<String>) -> Validator {
    let message = message.into();
    Box::new(move |value: &Value| {
        if value.is_empty() {
            Err(message.clone())
        } else {
            Ok(())
        }
    })
}

/// Text must match `re`. Anchor the pattern for a full match; leave it
/// unanchored for a containment check.
pub fn matches(re: Regex, message: impl Into<String>) -> Validator {
    let message = message.into();
    Box::new(move |value: &Value| match value.as_text() {
        Some(text) if re.is_match(text) => Ok(()),
        _ => Err(message.clone()),
    })
}

/// Value must be exactly `Bool(true)`.
pub fn must_be_true(message: impl Into<String>) -> Validator {
    let message = message.into();
    Box::new(move |value: &Value| {
        if value.as_bool() == Some(true) {
            Ok(())
        } else {
            Err(message.clone())
        }
    })
}
