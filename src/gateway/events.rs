use async_trait::async_trait;
use crate::core::events::DomainEvent;
use crate::core::library::{LibraryError, log_failure};

#[async_trait]
pub(crate) trait EventPublisher: Sync + Send {
    async fn publish(&self, event: &DomainEvent) -> Result<(), LibraryError>;

    // Called once the mutation is committed, so a failed publish is logged and not returned.
    async fn publish_or_log(&self, event: serde_json::Result<DomainEvent>) {
        let res = match event {
            Ok(event) => self.publish(&event).await,
            Err(err) => Err(LibraryError::from(err)),
        };
        if let Err(err) = res {
            log_failure("publish", err);
        }
    }
}
