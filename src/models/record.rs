use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::types::{FieldName, FIELD_COUNT};

/// The current contents of the fraud check form.
///
/// Every one of the eleven fields is always present and holds free-form text, empty until edited.
/// Values are sent exactly as typed; numeric and datetime fields are not parsed.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct SubmissionRecord {
    values: [String; FIELD_COUNT]
}

impl SubmissionRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_field(&mut self, field: FieldName, value: impl Into<String>) {
        self.values[field.index()] = value.into();
    }

    pub fn get(&self, field: FieldName) -> &str {
        &self.values[field.index()]
    }

    /// Copies the record for submission so later edits do not affect an in-flight request.
    pub fn snapshot(&self) -> SubmissionRecord {
        self.clone()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &str)> + '_ {
        FieldName::ALL.into_iter().map(|field| (field, self.get(field)))
    }
}

impl Serialize for SubmissionRecord {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(FIELD_COUNT))?;

        for (field, value) in self.iter() {
            map.serialize_entry(field.as_str(), value)?;
        }

        map.end()
    }
}
