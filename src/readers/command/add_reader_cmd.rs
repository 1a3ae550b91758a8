use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::readers::domain::ReaderService;
use crate::readers::dto::ReaderDto;

pub(crate) struct AddReaderCommand {
    reader_service: Box<dyn ReaderService>,
}

impl AddReaderCommand {
    pub(crate) fn new(reader_service: Box<dyn ReaderService>) -> Self {
        Self {
            reader_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct AddReaderCommandRequest {
    pub(crate) reader_id: String,
    pub(crate) first_name: String,
    pub(crate) last_name: String,
}

impl AddReaderCommandRequest {
    pub fn new(reader_id: &str, first_name: &str, last_name: &str) -> Self {
        Self {
            reader_id: reader_id.to_string(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
        }
    }
    pub fn build_reader(&self) -> ReaderDto {
        ReaderDto::new(self.reader_id.as_str(), self.first_name.as_str(), self.last_name.as_str())
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct AddReaderCommandResponse {
    pub reader: ReaderDto,
}

impl AddReaderCommandResponse {
    pub fn new(reader: ReaderDto) -> Self {
        Self {
            reader,
        }
    }
}

#[async_trait]
impl Command<AddReaderCommandRequest, AddReaderCommandResponse> for AddReaderCommand {
    async fn execute(&self, req: AddReaderCommandRequest) -> Result<AddReaderCommandResponse, CommandError> {
        let reader = req.build_reader();
        self.reader_service.add_reader(&reader).await.map_err(CommandError::from).map(AddReaderCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::domain::model::Library;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::gateway::GatewayPublisherVia;
    use crate::readers::command::add_reader_cmd::{AddReaderCommand, AddReaderCommandRequest};
    use crate::readers::factory;

    #[tokio::test]
    async fn test_should_run_add_reader() {
        let config = Configuration::new("test");
        let cmd = AddReaderCommand::new(factory::create_reader_service(
            &config, Library::new(&config).shared(), GatewayPublisherVia::Memory));

        let res = cmd.execute(AddReaderCommandRequest::new("12345", "Ivan", "Ivanov")).await.expect("should add reader");
        assert_eq!("12345", res.reader.reader_id.as_str());

        let dup = cmd.execute(AddReaderCommandRequest::new("12345", "Ivan", "Ivanov")).await;
        assert!(matches!(dup, Err(CommandError::DuplicateKey { .. })));
    }
}
