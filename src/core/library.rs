use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Clone)]
pub enum LibraryError {
    BookNotFound {
        message: String,
    },
    // The book is catalogued but every copy is currently on loan.
    BookUnavailable {
        message: String,
    },
    InvalidBookData {
        message: String,
        reason_code: Option<String>,
    },
    DuplicateBook {
        message: String,
    },
    ReaderNotFound {
        message: String,
    },
    DuplicateReader {
        message: String,
    },
    InvalidReaderData {
        message: String,
        reason_code: Option<String>,
    },
    // Returned when a book is handed back by a reader who has no matching active loan.
    LoanNotFound {
        message: String,
    },
    Serialization {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
}

// ErrorCategory groups errors the same way the catalog groups its entities.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum ErrorCategory {
    Book,
    Reader,
    Loan,
    Internal,
}

impl LibraryError {
    pub fn book_not_found(message: &str) -> LibraryError {
        LibraryError::BookNotFound { message: message.to_string() }
    }

    pub fn book_unavailable(message: &str) -> LibraryError {
        LibraryError::BookUnavailable { message: message.to_string() }
    }

    pub fn invalid_book_data(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::InvalidBookData { message: message.to_string(), reason_code }
    }

    pub fn duplicate_book(message: &str) -> LibraryError {
        LibraryError::DuplicateBook { message: message.to_string() }
    }

    pub fn reader_not_found(message: &str) -> LibraryError {
        LibraryError::ReaderNotFound { message: message.to_string() }
    }

    pub fn duplicate_reader(message: &str) -> LibraryError {
        LibraryError::DuplicateReader { message: message.to_string() }
    }

    pub fn invalid_reader_data(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::InvalidReaderData { message: message.to_string(), reason_code }
    }

    pub fn loan_not_found(message: &str) -> LibraryError {
        LibraryError::LoanNotFound { message: message.to_string() }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }

    pub fn runtime(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Runtime { message: message.to_string(), reason_code }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            LibraryError::BookNotFound { .. } => { ErrorCategory::Book }
            LibraryError::BookUnavailable { .. } => { ErrorCategory::Book }
            LibraryError::InvalidBookData { .. } => { ErrorCategory::Book }
            LibraryError::DuplicateBook { .. } => { ErrorCategory::Book }
            LibraryError::ReaderNotFound { .. } => { ErrorCategory::Reader }
            LibraryError::DuplicateReader { .. } => { ErrorCategory::Reader }
            LibraryError::InvalidReaderData { .. } => { ErrorCategory::Reader }
            LibraryError::LoanNotFound { .. } => { ErrorCategory::Loan }
            LibraryError::Serialization { .. } => { ErrorCategory::Internal }
            LibraryError::Runtime { .. } => { ErrorCategory::Internal }
        }
    }

    pub fn message(&self) -> &str {
        match self {
            LibraryError::BookNotFound { message } => { message }
            LibraryError::BookUnavailable { message } => { message }
            LibraryError::InvalidBookData { message, .. } => { message }
            LibraryError::DuplicateBook { message } => { message }
            LibraryError::ReaderNotFound { message } => { message }
            LibraryError::DuplicateReader { message } => { message }
            LibraryError::InvalidReaderData { message, .. } => { message }
            LibraryError::LoanNotFound { message } => { message }
            LibraryError::Serialization { message } => { message }
            LibraryError::Runtime { message, .. } => { message }
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, LibraryError::BookNotFound { .. } |
            LibraryError::ReaderNotFound { .. } |
            LibraryError::LoanNotFound { .. })
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::serialization(
            format!("serde json parsing {:?}", err).as_str())
    }
}

impl std::error::Error for LibraryError {}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            LibraryError::BookNotFound { message } => {
                write!(f, "book not found: {}", message)
            }
            LibraryError::BookUnavailable { message } => {
                write!(f, "book unavailable: {}", message)
            }
            LibraryError::InvalidBookData { message, reason_code } => {
                write!(f, "invalid book data: {} {:?}", message, reason_code)
            }
            LibraryError::DuplicateBook { message } => {
                write!(f, "duplicate book: {}", message)
            }
            LibraryError::ReaderNotFound { message } => {
                write!(f, "reader not found: {}", message)
            }
            LibraryError::DuplicateReader { message } => {
                write!(f, "duplicate reader: {}", message)
            }
            LibraryError::InvalidReaderData { message, reason_code } => {
                write!(f, "invalid reader data: {} {:?}", message, reason_code)
            }
            LibraryError::LoanNotFound { message } => {
                write!(f, "loan not found: {}", message)
            }
            LibraryError::Serialization { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Runtime { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
        }
    }
}

/// A specialized Result type for library operations.
pub type LibraryResult<T> = Result<T, LibraryError>;

// logs a failed operation and hands the error back so the caller can carry on
pub(crate) fn log_failure(operation: &str, err: LibraryError) -> LibraryError {
    tracing::warn!(operation, category = ?err.category(), "{}", err);
    err
}

#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum LoanStatus {
    OnLoan,
    Returned,
}

impl From<String> for LoanStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "OnLoan" => LoanStatus::OnLoan,
            "Returned" => LoanStatus::Returned,
            _ => LoanStatus::OnLoan,
        }
    }
}

impl Display for LoanStatus {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            LoanStatus::OnLoan => write!(f, "OnLoan"),
            LoanStatus::Returned => write!(f, "Returned"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::library::{ErrorCategory, LibraryError, LoanStatus};

    #[tokio::test]
    async fn test_should_create_book_errors() {
        assert!(matches!(LibraryError::book_not_found("test"), LibraryError::BookNotFound{ message: _ }));
        assert!(matches!(LibraryError::book_unavailable("test"), LibraryError::BookUnavailable{ message: _ }));
        assert!(matches!(LibraryError::invalid_book_data("test", None), LibraryError::InvalidBookData{ message: _, reason_code: _ }));
        assert!(matches!(LibraryError::duplicate_book("test"), LibraryError::DuplicateBook{ message: _ }));
    }

    #[tokio::test]
    async fn test_should_create_reader_errors() {
        assert!(matches!(LibraryError::reader_not_found("test"), LibraryError::ReaderNotFound{ message: _ }));
        assert!(matches!(LibraryError::duplicate_reader("test"), LibraryError::DuplicateReader{ message: _ }));
        assert!(matches!(LibraryError::invalid_reader_data("test", None), LibraryError::InvalidReaderData{ message: _, reason_code: _ }));
    }

    #[tokio::test]
    async fn test_should_categorize_errors() {
        assert_eq!(ErrorCategory::Book, LibraryError::book_not_found("test").category());
        assert_eq!(ErrorCategory::Book, LibraryError::book_unavailable("test").category());
        assert_eq!(ErrorCategory::Book, LibraryError::invalid_book_data("test", None).category());
        assert_eq!(ErrorCategory::Book, LibraryError::duplicate_book("test").category());
        assert_eq!(ErrorCategory::Reader, LibraryError::reader_not_found("test").category());
        assert_eq!(ErrorCategory::Reader, LibraryError::duplicate_reader("test").category());
        assert_eq!(ErrorCategory::Reader, LibraryError::invalid_reader_data("test", None).category());
        assert_eq!(ErrorCategory::Loan, LibraryError::loan_not_found("test").category());
        assert_eq!(ErrorCategory::Internal, LibraryError::serialization("test").category());
        assert_eq!(ErrorCategory::Internal, LibraryError::runtime("test", None).category());
    }

    #[tokio::test]
    async fn test_should_detect_not_found() {
        assert!(LibraryError::book_not_found("test").is_not_found());
        assert!(LibraryError::reader_not_found("test").is_not_found());
        assert!(LibraryError::loan_not_found("test").is_not_found());
        assert!(!LibraryError::book_unavailable("test").is_not_found());
        assert!(!LibraryError::duplicate_reader("test").is_not_found());
    }

    #[tokio::test]
    async fn test_should_format_error_message() {
        let err = LibraryError::loan_not_found("isbn 1 was not lent to reader r1");
        assert_eq!("isbn 1 was not lent to reader r1", err.message());
        assert_eq!("loan not found: isbn 1 was not lent to reader r1", err.to_string());
    }

    #[tokio::test]
    async fn test_should_convert_json_error() {
        let err = serde_json::from_str::<u32>("not json").expect_err("should fail");
        assert!(matches!(LibraryError::from(err), LibraryError::Serialization{ message: _ }));
    }

    #[tokio::test]
    async fn test_should_format_loan_status() {
        let statuses = vec![
            LoanStatus::OnLoan,
            LoanStatus::Returned,
        ];
        for status in statuses {
            let str = status.to_string();
            let str_status = LoanStatus::from(str);
            assert_eq!(status, str_status);
        }
    }
}
