mod errors;
mod field;

pub use errors::FieldError;
pub use field::{FieldKind, FieldName, SelectOption, FIELD_COUNT};
