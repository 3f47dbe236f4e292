mod form_session;
#[cfg(test)]
mod tests;

use crate::types::FieldName;

pub use form_session::FormSession;

pub type SubmissionId = u64;

/// A user action on the form.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum FormEvent {
    SetField {
        field: FieldName,
        value: String
    },
    Show,
    Help,
    Submit
}
