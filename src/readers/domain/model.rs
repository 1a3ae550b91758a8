use std::fmt;
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};
use crate::core::domain::Identifiable;

// ReaderEntity abstracts a registered library member, identified by reader_id only.
#[derive(Debug, Clone)]
pub struct ReaderEntity {
    pub first_name: String,
    pub last_name: String,
    pub reader_id: String,
}

impl ReaderEntity {
    pub fn new(first_name: &str, last_name: &str, reader_id: &str) -> Self {
        Self {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            reader_id: reader_id.to_string(),
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl PartialEq for ReaderEntity {
    fn eq(&self, other: &Self) -> bool {
        self.reader_id == other.reader_id
    }
}

impl Eq for ReaderEntity {}

impl Hash for ReaderEntity {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.reader_id.hash(state);
    }
}

impl Identifiable for ReaderEntity {
    fn id(&self) -> String {
        self.reader_id.to_string()
    }
}

impl Display for ReaderEntity {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{} {} (ID: {})", self.first_name, self.last_name, self.reader_id)
    }
}
