use async_trait::async_trait;
use chrono::NaiveDate;
use crate::core::library::LibraryResult;
use crate::loans::dto::LoanDto;

pub mod model;
pub mod service;

#[async_trait]
pub(crate) trait LoanService: Sync + Send {
    // lends one copy; due_date defaults to the configured loan period from today
    async fn lend(&self, isbn: &str, reader_id: &str, due_date: Option<NaiveDate>) -> LibraryResult<LoanDto>;
    async fn return_book(&self, isbn: &str, reader_id: &str) -> LibraryResult<LoanDto>;
    async fn list_loans(&self) -> LibraryResult<Vec<LoanDto>>;
    async fn query_overdue(&self, today: NaiveDate) -> LibraryResult<Vec<LoanDto>>;
}
