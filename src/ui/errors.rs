use thiserror::Error;

use crate::types::FieldError;

#[derive(Debug, Error, Eq, PartialEq)]
pub enum InputError {
    #[error("Unrecognized input [{line}], type 'help' for the list of commands")]
    UnknownCommand {
        line: String
    },
    #[error(transparent)]
    Field(#[from] FieldError)
}

impl InputError {
    pub fn unknown_command(line: &str) -> Self {
        Self::UnknownCommand { line: line.to_string() }
    }
}
