use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::loans::domain::LoanService;
use crate::loans::dto::LoanDto;

pub(crate) struct LendBookCommand {
    loan_service: Box<dyn LoanService>,
}

impl LendBookCommand {
    pub(crate) fn new(loan_service: Box<dyn LoanService>) -> Self {
        Self {
            loan_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct LendBookCommandRequest {
    isbn: String,
    reader_id: String,
    #[serde(default)]
    due_date: Option<NaiveDate>,
}

impl LendBookCommandRequest {
    pub fn new(isbn: &str, reader_id: &str, due_date: Option<NaiveDate>) -> Self {
        Self {
            isbn: isbn.to_string(),
            reader_id: reader_id.to_string(),
            due_date,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct LendBookCommandResponse {
    pub loan: LoanDto,
}

impl LendBookCommandResponse {
    pub fn new(loan: LoanDto) -> Self {
        Self {
            loan,
        }
    }
}

#[async_trait]
impl Command<LendBookCommandRequest, LendBookCommandResponse> for LendBookCommand {
    async fn execute(&self, req: LendBookCommandRequest) -> Result<LendBookCommandResponse, CommandError> {
        self.loan_service.lend(req.isbn.as_str(), req.reader_id.as_str(), req.due_date)
            .await.map_err(CommandError::from).map(LendBookCommandResponse::new)
    }
}
