use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::readers::domain::ReaderService;
use crate::readers::dto::ReaderDto;

pub(crate) struct RemoveReaderCommand {
    reader_service: Box<dyn ReaderService>,
}

impl RemoveReaderCommand {
    pub(crate) fn new(reader_service: Box<dyn ReaderService>) -> Self {
        Self {
            reader_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RemoveReaderCommandRequest {
    pub(crate) reader_id: String,
}

impl RemoveReaderCommandRequest {
    pub fn new(reader_id: String) -> Self {
        Self {
            reader_id,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct RemoveReaderCommandResponse {
    reader: ReaderDto,
}

impl RemoveReaderCommandResponse {
    pub fn new(reader: ReaderDto) -> Self {
        Self {
            reader,
        }
    }
}

#[async_trait]
impl Command<RemoveReaderCommandRequest, RemoveReaderCommandResponse> for RemoveReaderCommand {
    async fn execute(&self, req: RemoveReaderCommandRequest) -> Result<RemoveReaderCommandResponse, CommandError> {
        self.reader_service.remove_reader(req.reader_id.as_str())
            .await.map_err(CommandError::from).map(RemoveReaderCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::domain::model::Library;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::gateway::GatewayPublisherVia;
    use crate::readers::command::add_reader_cmd::{AddReaderCommand, AddReaderCommandRequest};
    use crate::readers::command::remove_reader_cmd::{RemoveReaderCommand, RemoveReaderCommandRequest};
    use crate::readers::factory;

    #[tokio::test]
    async fn test_should_run_remove_reader() {
        let config = Configuration::new("test");
        let library = Library::new(&config).shared();
        let add_cmd = AddReaderCommand::new(factory::create_reader_service(&config, library.clone(), GatewayPublisherVia::Memory));
        let remove_cmd = RemoveReaderCommand::new(factory::create_reader_service(&config, library.clone(), GatewayPublisherVia::Memory));

        let _ = add_cmd.execute(AddReaderCommandRequest::new("12345", "Ivan", "Ivanov")).await.expect("should add reader");
        let removed = remove_cmd.execute(RemoveReaderCommandRequest::new("12345".to_string())).await.expect("should remove reader");
        assert_eq!("12345", removed.reader.reader_id.as_str());
        assert_eq!(0, library.lock().await.reader_count());

        let res = remove_cmd.execute(RemoveReaderCommandRequest::new("12345".to_string())).await;
        assert!(matches!(res, Err(CommandError::NotFound { .. })));
    }
}
