use std::sync::{Arc, Mutex};
use async_trait::async_trait;
use crate::core::events::DomainEvent;
use crate::core::library::ShopError;
use crate::gateway::events::EventPublisher;

// MemoryPublisher retains published event names; clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct MemoryPublisher {
    published: Arc<Mutex<Vec<String>>>,
}

impl MemoryPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn published(&self) -> Vec<String> {
        match self.published.lock() {
            Ok(names) => names.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

// UnavailablePublisher rejects every event, standing in for a sink that is down.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailablePublisher;

#[async_trait]
impl EventPublisher for UnavailablePublisher {
    async fn publish(&self, event: &DomainEvent) -> Result<(), ShopError> {
        Err(ShopError::runtime(format!("event sink unavailable for {}", event.name).as_str(), None))
    }
}

#[async_trait]
impl EventPublisher for MemoryPublisher {
    async fn publish(&self, event: &DomainEvent) -> Result<(), ShopError> {
        let mut names = self.published.lock()
            .map_err(|err| ShopError::runtime(format!("event buffer poisoned {}", err).as_str(), None))?;
        names.push(event.name.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use crate::core::events::DomainEvent;
    use crate::gateway::events::EventPublisher;
    use crate::gateway::memory::publisher::MemoryPublisher;

    #[tokio::test]
    async fn test_should_retain_published_events() {
        let publisher = MemoryPublisher::new();
        let observer = publisher.clone();
        let event = DomainEvent::added("cart_item_added", "cart", "1", &HashMap::new(), &1).expect("build event");
        publisher.publish(&event).await.expect("should publish");
        assert_eq!(vec!["cart_item_added".to_string()], observer.published());
    }
}
