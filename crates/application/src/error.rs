use std::fmt::{Display, Formatter};

use partial_pages_domain::DomainError;

#[derive(Debug)]
pub enum ApplicationError {
    Domain(DomainError),
    InvalidInput(String),
    Io(String),
    Persistence(String),
    Decode(String),
    Serialization(String),
}

impl Display for ApplicationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Domain(error) => write!(f, "{error}"),
            Self::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            Self::Io(msg) => write!(f, "io error: {msg}"),
            Self::Persistence(msg) => write!(f, "persistence error: {msg}"),
            Self::Decode(msg) => write!(f, "decode error: {msg}"),
            Self::Serialization(msg) => write!(f, "serialization error: {msg}"),
        }
    }
}

impl std::error::Error for ApplicationError {}

impl From<DomainError> for ApplicationError {
    fn from(value: DomainError) -> Self {
        Self::Domain(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_failing_layer() {
        assert_eq!(
            ApplicationError::Serialization("key must be a string".to_string()).to_string(),
            "serialization error: key must be a string"
        );
        assert_eq!(
            ApplicationError::from(DomainError::EmptyWidthTag).to_string(),
            "width tag must not be empty"
        );
    }
}
