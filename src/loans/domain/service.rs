use std::collections::HashMap;
use async_trait::async_trait;
use chrono::NaiveDate;
use crate::catalog::domain::model::SharedLibrary;
use crate::core::domain::Configuration;
use crate::core::events::{BOOK_LENT, BOOK_RETURNED, DomainEvent};
use crate::core::library::{LibraryError, LibraryResult, log_failure};
use crate::gateway::events::EventPublisher;
use crate::loans::domain::LoanService;
use crate::loans::domain::model::LoanEntity;
use crate::loans::dto::LoanDto;
use crate::utils::date::{days_from, today};

pub(crate) struct LoanServiceImpl {
    book_loan_days: i64,
    library: SharedLibrary,
    events_publisher: Box<dyn EventPublisher>,
}

impl LoanServiceImpl {
    pub(crate) fn new(config: &Configuration, library: SharedLibrary,
                      events_publisher: Box<dyn EventPublisher>) -> Self {
        Self {
            book_loan_days: config.book_loan_days,
            library,
            events_publisher,
        }
    }

    fn metadata(loan: &LoanDto) -> HashMap<String, String> {
        HashMap::from([
            ("isbn".to_string(), loan.isbn.to_string()),
            ("reader_id".to_string(), loan.reader_id.to_string()),
        ])
    }
}

#[async_trait]
impl LoanService for LoanServiceImpl {
    async fn lend(&self, isbn: &str, reader_id: &str, due_date: Option<NaiveDate>) -> LibraryResult<LoanDto> {
        let due_date = match due_date {
            Some(due_date) => due_date,
            None => days_from(today(), self.book_loan_days).ok_or_else(|| log_failure("lend", LibraryError::runtime(
                format!("loan period of {} days is out of range", self.book_loan_days).as_str(), None)))?,
        };
        let loan = self.library.lock().await.lend(isbn, reader_id, due_date)
            .map(|l| LoanDto::from(&l))
            .map_err(|e| log_failure("lend", e))?;
        self.events_publisher.publish_or_log(DomainEvent::added(
            BOOK_LENT, "loans", loan.loan_id.as_str(), &Self::metadata(&loan), &loan)).await;
        Ok(loan)
    }

    async fn return_book(&self, isbn: &str, reader_id: &str) -> LibraryResult<LoanDto> {
        let loan = self.library.lock().await.return_book(isbn, reader_id)
            .map(|l| LoanDto::from(&l))
            .map_err(|e| log_failure("return_book", e))?;
        self.events_publisher.publish_or_log(DomainEvent::deleted(
            BOOK_RETURNED, "loans", loan.loan_id.as_str(), &Self::metadata(&loan), &loan)).await;
        Ok(loan)
    }

    async fn list_loans(&self) -> LibraryResult<Vec<LoanDto>> {
        let library = self.library.lock().await;
        Ok(library.list_loans().iter().map(LoanDto::from).collect())
    }

    async fn query_overdue(&self, today: NaiveDate) -> LibraryResult<Vec<LoanDto>> {
        let library = self.library.lock().await;
        let overdue: Vec<LoanDto> = library.overdue_loans(today).into_iter().map(LoanDto::from).collect();
        tracing::debug!(count = overdue.len(), "queried overdue loans");
        Ok(overdue)
    }
}

impl From<&LoanEntity> for LoanDto {
    fn from(other: &LoanEntity) -> Self {
        Self {
            loan_id: other.loan_id.to_string(),
            isbn: other.isbn.to_string(),
            title: other.title.to_string(),
            reader_id: other.reader_id.to_string(),
            reader_name: other.reader_name.to_string(),
            loan_status: other.loan_status,
            loan_date: other.loan_date,
            due_date: other.due_date,
            returned_at: other.returned_at,
        }
    }
}
