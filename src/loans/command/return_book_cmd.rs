use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::loans::domain::LoanService;
use crate::loans::dto::LoanDto;

pub(crate) struct ReturnBookCommand {
    loan_service: Box<dyn LoanService>,
}

impl ReturnBookCommand {
    pub(crate) fn new(loan_service: Box<dyn LoanService>) -> Self {
        Self {
            loan_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ReturnBookCommandRequest {
    isbn: String,
    reader_id: String,
}

impl ReturnBookCommandRequest {
    pub fn new(isbn: &str, reader_id: &str) -> Self {
        Self {
            isbn: isbn.to_string(),
            reader_id: reader_id.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct ReturnBookCommandResponse {
    pub loan: LoanDto,
}

impl ReturnBookCommandResponse {
    pub fn new(loan: LoanDto) -> Self {
        Self {
            loan,
        }
    }
}

#[async_trait]
impl Command<ReturnBookCommandRequest, ReturnBookCommandResponse> for ReturnBookCommand {
    async fn execute(&self, req: ReturnBookCommandRequest) -> Result<ReturnBookCommandResponse, CommandError> {
        self.loan_service.return_book(req.isbn.as_str(), req.reader_id.as_str())
            .await.map_err(CommandError::from).map(ReturnBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::core::library::LoanStatus;
    use crate::gateway::GatewayPublisherVia;
    use crate::loans::command::lend_book_cmd::{LendBookCommand, LendBookCommandRequest};
    use crate::loans::command::return_book_cmd::{ReturnBookCommand, ReturnBookCommandRequest};
    use crate::loans::command::tests::seeded_library;
    use crate::loans::factory;

    #[tokio::test]
    async fn test_should_run_return_book() {
        let config = Configuration::new("test");
        let library = seeded_library(&config, 1).await;
        let lend_cmd = LendBookCommand::new(factory::create_loan_service(&config, library.clone(), GatewayPublisherVia::Memory));
        let return_cmd = ReturnBookCommand::new(factory::create_loan_service(&config, library.clone(), GatewayPublisherVia::Memory));

        let _ = lend_cmd.execute(LendBookCommandRequest::new("978-0547928227", "12345", None)).await.expect("should lend book");
        let res = return_cmd.execute(ReturnBookCommandRequest::new("978-0547928227", "12345")).await.expect("should return book");
        assert_eq!(LoanStatus::Returned, res.loan.loan_status);
        assert_eq!(1, library.lock().await.find_book("978-0547928227").expect("should find book").quantity());

        let res = return_cmd.execute(ReturnBookCommandRequest::new("978-0547928227", "12345")).await;
        assert!(matches!(res, Err(CommandError::NotFound { .. })));
    }
}
