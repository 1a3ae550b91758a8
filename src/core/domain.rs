use std::env;
use serde::{Deserialize, Serialize};

// Identifiable defines common traits that can be shared by catalogued objects
pub trait Identifiable: Sync + Send {
    fn id(&self) -> String;
}

// LibraryAsset is implemented by anything that can describe itself to a library visitor.
pub trait LibraryAsset {
    fn display_info(&self) -> String;
}

pub const DEFAULT_LIBRARY_TYPE: &str = "Public";
pub const DEFAULT_BOOK_LOAN_DAYS: i64 = 15;
pub const MAX_BOOK_LOAN_DAYS: i64 = 3650;
pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:3000";

// Configuration abstracts config options for library system
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub library_name: String,
    pub address: String,
    pub library_type: String,
    pub book_loan_days: i64,
    pub bind_address: String,
}

impl Configuration {
    pub fn new(library_name: &str) -> Self {
        Configuration {
            library_name: library_name.to_string(),
            address: "".to_string(),
            library_type: DEFAULT_LIBRARY_TYPE.to_string(),
            book_loan_days: DEFAULT_BOOK_LOAN_DAYS,
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
        }
    }

    pub fn with_address(mut self, address: &str) -> Self {
        self.address = address.to_string();
        self
    }

    pub fn with_library_type(mut self, library_type: &str) -> Self {
        self.library_type = library_type.to_string();
        self
    }

    // Reads LIBRARY_* variables and falls back to the defaults for anything missing.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Self
        where F: Fn(&str) -> Option<String> {
        let mut config = Configuration::new(
            lookup("LIBRARY_NAME").unwrap_or_else(|| "dev".to_string()).as_str());
        if let Some(address) = lookup("LIBRARY_ADDRESS") {
            config.address = address;
        }
        if let Some(library_type) = lookup("LIBRARY_TYPE") {
            config.library_type = library_type;
        }
        if let Some(days) = lookup("LIBRARY_LOAN_DAYS") {
            match days.parse::<i64>() {
                Ok(days) if (1..=MAX_BOOK_LOAN_DAYS).contains(&days) => config.book_loan_days = days,
                _ => tracing::warn!("ignoring LIBRARY_LOAN_DAYS={}, using {} days", days, DEFAULT_BOOK_LOAN_DAYS),
            }
        }
        if let Some(bind_address) = lookup("LIBRARY_BIND_ADDR") {
            config.bind_address = bind_address;
        }
        config
    }
}
