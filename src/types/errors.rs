use thiserror::Error;

#[derive(Debug, Error, Eq, PartialEq)]
pub enum FieldError {
    #[error("Unknown form field [{name}]")]
    UnknownField {
        name: String
    }
}

impl FieldError {
    pub fn unknown_field(name: &str) -> Self {
        Self::UnknownField { name: name.to_string() }
    }
}
