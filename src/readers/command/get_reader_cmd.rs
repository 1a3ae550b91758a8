use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::readers::domain::ReaderService;
use crate::readers::dto::ReaderDto;

pub(crate) struct GetReaderCommand {
    reader_service: Box<dyn ReaderService>,
}

impl GetReaderCommand {
    pub(crate) fn new(reader_service: Box<dyn ReaderService>) -> Self {
        Self {
            reader_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct GetReaderCommandRequest {
    pub(crate) reader_id: String,
}

impl GetReaderCommandRequest {
    pub fn new(reader_id: String) -> Self {
        Self {
            reader_id,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct GetReaderCommandResponse {
    reader: ReaderDto,
}

impl GetReaderCommandResponse {
    pub fn new(reader: ReaderDto) -> Self {
        Self {
            reader,
        }
    }
}

#[async_trait]
impl Command<GetReaderCommandRequest, GetReaderCommandResponse> for GetReaderCommand {
    async fn execute(&self, req: GetReaderCommandRequest) -> Result<GetReaderCommandResponse, CommandError> {
        self.reader_service.find_reader_by_id(req.reader_id.as_str())
            .await.map_err(CommandError::from).map(GetReaderCommandResponse::new)
    }
}
