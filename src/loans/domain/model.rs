use std::fmt;
use std::fmt::{Display, Formatter};
use chrono::{NaiveDate, NaiveDateTime, Utc};
use uuid::Uuid;
use crate::books::domain::model::BookEntity;
use crate::core::domain::Identifiable;
use crate::core::library::LoanStatus;
use crate::readers::domain::model::ReaderEntity;

// LoanEntity records one copy of a book lent to one reader. It refers to the book and
// the reader by key; the title and reader name are kept for display.
#[derive(Debug, PartialEq, Clone)]
pub struct LoanEntity {
    pub loan_id: String,
    pub isbn: String,
    pub title: String,
    pub reader_id: String,
    pub reader_name: String,
    pub loan_status: LoanStatus,
    pub loan_date: NaiveDate,
    pub due_date: NaiveDate,
    pub returned_at: Option<NaiveDateTime>,
}

impl LoanEntity {
    pub fn new(book: &BookEntity, reader: &ReaderEntity, loan_date: NaiveDate, due_date: NaiveDate) -> Self {
        Self {
            loan_id: Uuid::new_v4().to_string(),
            isbn: book.isbn().to_string(),
            title: book.title().to_string(),
            reader_id: reader.reader_id.to_string(),
            reader_name: reader.full_name(),
            loan_status: LoanStatus::OnLoan,
            loan_date,
            due_date,
            returned_at: None,
        }
    }

    pub fn matches(&self, isbn: &str, reader_id: &str) -> bool {
        self.isbn == isbn && self.reader_id == reader_id
    }

    // overdue once the due date has passed; a book due today is not overdue yet.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.loan_status == LoanStatus::OnLoan && self.due_date < today
    }

    pub(crate) fn mark_returned(&mut self) {
        self.loan_status = LoanStatus::Returned;
        self.returned_at = Some(Utc::now().naive_utc());
    }
}

impl Identifiable for LoanEntity {
    fn id(&self) -> String {
        self.loan_id.to_string()
    }
}

impl Display for LoanEntity {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "Book: {}, Reader: {}, Loan date: {}, Due date: {}",
               self.title, self.reader_name, self.loan_date, self.due_date)
    }
}
