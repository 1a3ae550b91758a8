use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;

// ReaderDto is a data transfer object for a registered library member.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub(crate) struct ReaderDto {
    pub reader_id: String,
    pub first_name: String,
    pub last_name: String,
}

impl ReaderDto {
    pub(crate) fn new(reader_id: &str, first_name: &str, last_name: &str) -> Self {
        Self {
            reader_id: reader_id.to_string(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
        }
    }
}

impl Identifiable for ReaderDto {
    fn id(&self) -> String {
        self.reader_id.to_string()
    }
}
