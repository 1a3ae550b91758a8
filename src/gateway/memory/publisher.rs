use std::sync::Arc;
use async_trait::async_trait;
use tokio::sync::Mutex;
use crate::core::events::DomainEvent;
use crate::core::library::LibraryError;
use crate::gateway::events::EventPublisher;

// MemoryPublisher keeps published events in process. Clones share the same event list.
#[derive(Debug, Clone, Default)]
pub struct MemoryPublisher {
    events: Arc<Mutex<Vec<DomainEvent>>>,
}

impl MemoryPublisher {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) async fn events(&self) -> Vec<DomainEvent> {
        self.events.lock().await.clone()
    }

    pub(crate) async fn names(&self) -> Vec<String> {
        self.events.lock().await.iter().map(|e| e.name.to_string()).collect()
    }
}

#[async_trait]
impl EventPublisher for MemoryPublisher {
    async fn publish(&self, event: &DomainEvent) -> Result<(), LibraryError> {
        self.events.lock().await.push(event.clone());
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use crate::core::events::{BOOK_ADDED, BOOK_REMOVED, DomainEvent};
    use crate::gateway::events::EventPublisher;
    use crate::gateway::memory::publisher::MemoryPublisher;

    #[tokio::test]
    async fn test_should_publish_to_memory() {
        let publisher = MemoryPublisher::new();
        let observer = publisher.clone();
        let added = DomainEvent::added(BOOK_ADDED, "catalog", "isbn", &HashMap::new(), &"book").expect("build event");
        let removed = DomainEvent::deleted(BOOK_REMOVED, "catalog", "isbn", &HashMap::new(), &"isbn").expect("build event");
        publisher.publish(&added).await.expect("should publish");
        publisher.publish(&removed).await.expect("should publish");
        assert_eq!(vec![BOOK_ADDED.to_string(), BOOK_REMOVED.to_string()], observer.names().await);
        assert_eq!(added, observer.events().await[0]);
    }
}
