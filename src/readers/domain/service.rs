use std::collections::HashMap;
use async_trait::async_trait;
use crate::catalog::domain::model::SharedLibrary;
use crate::core::domain::{Configuration, Identifiable};
use crate::core::events::{DomainEvent, READER_ADDED, READER_REMOVED};
use crate::core::library::{LibraryResult, log_failure};
use crate::gateway::events::EventPublisher;
use crate::readers::domain::ReaderService;
use crate::readers::domain::model::ReaderEntity;
use crate::readers::dto::ReaderDto;

pub(crate) struct ReaderServiceImpl {
    library: SharedLibrary,
    events_publisher: Box<dyn EventPublisher>,
}

impl ReaderServiceImpl {
    pub(crate) fn new(_config: &Configuration, library: SharedLibrary,
                      events_publisher: Box<dyn EventPublisher>) -> Self {
        ReaderServiceImpl {
            library,
            events_publisher,
        }
    }
}

#[async_trait]
impl ReaderService for ReaderServiceImpl {
    async fn add_reader(&self, reader: &ReaderDto) -> LibraryResult<ReaderDto> {
        self.library.lock().await.add_reader(ReaderEntity::from(reader))
            .map_err(|e| log_failure("add_reader", e))?;
        self.events_publisher.publish_or_log(DomainEvent::added(
            READER_ADDED, "readers", reader.id().as_str(), &HashMap::new(), reader)).await;
        Ok(reader.clone())
    }

    async fn remove_reader(&self, reader_id: &str) -> LibraryResult<ReaderDto> {
        let removed = self.library.lock().await.remove_reader(reader_id)
            .map(|r| ReaderDto::from(&r))
            .map_err(|e| log_failure("remove_reader", e))?;
        self.events_publisher.publish_or_log(DomainEvent::deleted(
            READER_REMOVED, "readers", reader_id, &HashMap::new(), &removed)).await;
        Ok(removed)
    }

    async fn find_reader_by_id(&self, reader_id: &str) -> LibraryResult<ReaderDto> {
        self.library.lock().await.find_reader(reader_id)
            .map(ReaderDto::from)
            .map_err(|e| log_failure("find_reader", e))
    }

    async fn list_readers(&self) -> LibraryResult<Vec<ReaderDto>> {
        let library = self.library.lock().await;
        Ok(library.list_readers().into_iter().map(ReaderDto::from).collect())
    }
}

impl From<&ReaderEntity> for ReaderDto {
    fn from(other: &ReaderEntity) -> Self {
        Self {
            reader_id: other.reader_id.to_string(),
            first_name: other.first_name.to_string(),
            last_name: other.last_name.to_string(),
        }
    }
}

impl From<&ReaderDto> for ReaderEntity {
    fn from(other: &ReaderDto) -> Self {
        ReaderEntity::new(other.first_name.as_str(), other.last_name.as_str(), other.reader_id.as_str())
    }
}
