use async_trait::async_trait;
use crate::core::library::LibraryError;

#[derive(Debug, PartialEq)]
pub enum CommandError {
    NotFound {
        message: String,
    },
    DuplicateKey {
        message: String,
    },
    Unavailable {
        message: String,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    Serialization {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
}

#[async_trait]
pub trait Command<Request, Response> {
    async fn execute(&self, req: Request) -> Result<Response, CommandError>;
}

impl From<LibraryError> for CommandError {
    fn from(other: LibraryError) -> Self {
        match other {
            LibraryError::BookNotFound { message } => {
                CommandError::NotFound { message }
            }
            LibraryError::ReaderNotFound { message } => {
                CommandError::NotFound { message }
            }
            LibraryError::LoanNotFound { message } => {
                CommandError::NotFound { message }
            }
            LibraryError::DuplicateBook { message } => {
                CommandError::DuplicateKey { message }
            }
            LibraryError::DuplicateReader { message } => {
                CommandError::DuplicateKey { message }
            }
            LibraryError::BookUnavailable { message } => {
                CommandError::Unavailable { message }
            }
            LibraryError::InvalidBookData { message, reason_code } => {
                CommandError::Validation { message, reason_code }
            }
            LibraryError::InvalidReaderData { message, reason_code } => {
                CommandError::Validation { message, reason_code }
            }
            LibraryError::Serialization { message } => {
                CommandError::Serialization { message }
            }
            LibraryError::Runtime { message, reason_code } => {
                CommandError::Runtime { message, reason_code }
            }
        }
    }
}
