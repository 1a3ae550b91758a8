use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Serialize;
use crate::core::command::{Command, CommandError};
use crate::loans::domain::LoanService;
use crate::loans::dto::LoanDto;

pub(crate) struct ListLoansCommand {
    loan_service: Box<dyn LoanService>,
}

impl ListLoansCommand {
    pub(crate) fn new(loan_service: Box<dyn LoanService>) -> Self {
        Self {
            loan_service,
        }
    }
}

// overdue_on set restricts the listing to loans overdue on that day
#[derive(Debug, Default)]
pub(crate) struct ListLoansCommandRequest {
    overdue_on: Option<NaiveDate>,
}

impl ListLoansCommandRequest {
    pub fn overdue(today: NaiveDate) -> Self {
        Self {
            overdue_on: Some(today),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct ListLoansCommandResponse {
    pub loans: Vec<LoanDto>,
}

impl ListLoansCommandResponse {
    pub fn new(loans: Vec<LoanDto>) -> Self {
        Self {
            loans,
        }
    }
}

#[async_trait]
impl Command<ListLoansCommandRequest, ListLoansCommandResponse> for ListLoansCommand {
    async fn execute(&self, req: ListLoansCommandRequest) -> Result<ListLoansCommandResponse, CommandError> {
        let res = match req.overdue_on {
            Some(today) => self.loan_service.query_overdue(today).await,
            None => self.loan_service.list_loans().await,
        };
        res.map_err(CommandError::from).map(ListLoansCommandResponse::new)
    }
}
