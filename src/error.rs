use thiserror::Error;

pub use crate::base64::decode::Error as DecodeError;

#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum Error {
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error("Invalid {key}: {source}")]
    InvalidVariable { key: &'static str, source: ParseError },
}

#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[error("Invalid value '{value}' (expected {expected})")]
pub struct ParseError {
    value: String,
    expected: &'static str,
}

impl ParseError {
    pub fn new(value: impl Into<String>, expected: &'static str) -> Self {
        Self {
            value: value.into(),
            expected,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}
