use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    None,
    Text(String),
    Bool(bool),
}

impl Value {
    pub fn is_empty(&self) -> bool {
        match self {
            Self::None => true,
            Self::Text(v) => v.is_empty(),
            Self::Bool(_) => false,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(v) => Some(v.as_str()),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::None, Into::into)
    }
}

/// Current contents of the form. Serialized verbatim as the submission body.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct FormValues {
    pub password: String,
    pub accept: bool,
}

impl FormValues {
    pub fn get(&self, name: &str) -> Option<Value> {
        match name {
            fields::PASSWORD => Some(Value::Text(self.password.clone())),
            fields::ACCEPT => Some(Value::Bool(self.accept)),
            _ => None,
        }
    }

    pub fn to_json(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}

pub mod fields {
    pub const PASSWORD: &str = "password";
    pub const ACCEPT: &str = "accept";
}
