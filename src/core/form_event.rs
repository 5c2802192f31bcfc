use crate::core::value::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Password,
    Checkbox,
}

/// A change reported by an input control. Checkboxes carry `checked`,
/// every other kind carries `value`.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldChange {
    pub kind: InputKind,
    pub name: String,
    pub value: Option<String>,
    pub checked: Option<bool>,
}

impl FieldChange {
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            kind: InputKind::Text,
            name: name.into(),
            value: Some(value.into()),
            checked: None,
        }
    }

    pub fn password(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            kind: InputKind::Password,
            ..Self::text(name, value)
        }
    }

    pub fn checkbox(name: impl Into<String>, checked: bool) -> Self {
        Self {
            kind: InputKind::Checkbox,
            name: name.into(),
            value: None,
            checked: Some(checked),
        }
    }

    pub fn field_value(&self) -> Value {
        match self.kind {
            InputKind::Checkbox => Value::from(self.checked),
            InputKind::Text | InputKind::Password => Value::from(self.value.clone()),
        }
    }
}
