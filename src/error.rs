use crate::config::ConfigError;
use std::io;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("unknown field `{0}`")]
    UnknownField(String),
    #[error("{message}")]
    Invalid { field: String, message: String },
    #[error("field `{field}` expects a {expected} value")]
    ValueType {
        field: String,
        expected: &'static str,
    },
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
    #[error("failed to initialise logging: {0}")]
    Logging(String),
}
