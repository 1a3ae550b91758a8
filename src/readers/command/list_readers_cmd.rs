use async_trait::async_trait;
use serde::Serialize;
use crate::core::command::{Command, CommandError};
use crate::readers::domain::ReaderService;
use crate::readers::dto::ReaderDto;

pub(crate) struct ListReadersCommand {
    reader_service: Box<dyn ReaderService>,
}

impl ListReadersCommand {
    pub(crate) fn new(reader_service: Box<dyn ReaderService>) -> Self {
        Self {
            reader_service,
        }
    }
}

#[derive(Debug, Default)]
pub(crate) struct ListReadersCommandRequest {}

#[derive(Debug, Serialize)]
pub(crate) struct ListReadersCommandResponse {
    pub readers: Vec<ReaderDto>,
}

impl ListReadersCommandResponse {
    pub fn new(readers: Vec<ReaderDto>) -> Self {
        Self {
            readers,
        }
    }
}

#[async_trait]
impl Command<ListReadersCommandRequest, ListReadersCommandResponse> for ListReadersCommand {
    async fn execute(&self, _req: ListReadersCommandRequest) -> Result<ListReadersCommandResponse, CommandError> {
        self.reader_service.list_readers()
            .await.map_err(CommandError::from).map(ListReadersCommandResponse::new)
    }
}
