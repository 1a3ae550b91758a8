pub mod model;
pub mod service;

use async_trait::async_trait;
use crate::core::library::LibraryResult;
use crate::readers::dto::ReaderDto;

#[async_trait]
pub(crate) trait ReaderService: Sync + Send {
    async fn add_reader(&self, reader: &ReaderDto) -> LibraryResult<ReaderDto>;
    async fn remove_reader(&self, reader_id: &str) -> LibraryResult<ReaderDto>;
    async fn find_reader_by_id(&self, reader_id: &str) -> LibraryResult<ReaderDto>;
    async fn list_readers(&self) -> LibraryResult<Vec<ReaderDto>>;
}
