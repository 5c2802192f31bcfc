use crate::core::value::{FormValues, Value, fields};
use crate::validation::validators::{
    ValidationError, Validator, matches, must_be_true, required, run_validators,
};
use regex::Regex;
use std::sync::LazyLock;

pub const PASSWORD_MESSAGE: &str =
    "Must contain 8 characters, 1 uppercase, 1 lowercase, 1 number, & 1 special character.";
pub const ACCEPT_MESSAGE: &str = "Terms must be accepted";

// `regex` has no look-around, so the composite password pattern
// `^(?=.*[A-Za-z])(?=.*\d)(?=.*[@$!%*#?&])[A-Za-z\d@$!%*#?&]{8,}$`
// is split into one full-match check plus three containment checks.
// Letter case is not checked, whatever the message says.
static PASSWORD_CHARSET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9@$!%*#?\&]{8,}$").expect("password charset regex"));
static HAS_LETTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z]").expect("letter regex"));
static HAS_DIGIT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]").expect("digit regex"));
static HAS_SYMBOL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[@$!%*#?\&]").expect("symbol regex"));

pub struct FieldRule {
    name: &'static str,
    validators: Vec<Validator>,
}

impl FieldRule {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            validators: Vec::new(),
        }
    }

    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.validators.push(validator);
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn validate(&self, value: &Value) -> Result<(), ValidationError> {
        run_validators(&self.validators, value)
    }
}

/// Field → rule table. Built once and never mutated afterwards.
pub struct FormSchema {
    rules: Vec<FieldRule>,
}

impl FormSchema {
    pub fn new(rules: Vec<FieldRule>) -> Self {
        Self { rules }
    }

    pub fn standard() -> Self {
        Self::new(vec![password_rule(), accept_rule()])
    }

    pub fn rule(&self, name: &str) -> Option<&FieldRule> {
        self.rules.iter().find(|rule| rule.name == name)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.iter().map(FieldRule::name)
    }

    /// `None` when no rule exists for `name`.
    pub fn validate_field(&self, name: &str, value: &Value) -> Option<Result<(), ValidationError>> {
        self.rule(name).map(|rule| rule.validate(value))
    }

    pub fn validate_all(&self, values: &FormValues) -> bool {
        self.rules.iter().all(|rule| {
            let value = values.get(rule.name).unwrap_or_default();
            rule.validate(&value).is_ok()
        })
    }
}

impl Default for FormSchema {
    fn default() -> Self {
        Self::standard()
    }
}

fn password_rule() -> FieldRule {
    FieldRule::new(fields::PASSWORD)
        .with_validator(required(PASSWORD_MESSAGE))
        .with_validator(matches(PASSWORD_CHARSET.clone(), PASSWORD_MESSAGE))
        .with_validator(matches(HAS_LETTER.clone(), PASSWORD_MESSAGE))
        .with_validator(matches(HAS_DIGIT.clone(), PASSWORD_MESSAGE))
        .with_validator(matches(HAS_SYMBOL.clone(), PASSWORD_MESSAGE))
}

fn accept_rule() -> FieldRule {
    FieldRule::new(fields::ACCEPT).with_validator(must_be_true(ACCEPT_MESSAGE))
}
