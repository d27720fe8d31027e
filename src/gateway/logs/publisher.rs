use async_trait::async_trait;
use tracing::info;
use crate::core::events::DomainEvent;
use crate::core::library::ShopError;
use crate::gateway::events::EventPublisher;

// LogPublisher writes every domain event to the tracing subscriber.
#[derive(Debug, Default)]
pub struct LogPublisher {}

impl LogPublisher {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl EventPublisher for LogPublisher {
    async fn publish(&self, event: &DomainEvent) -> Result<(), ShopError> {
        let json = serde_json::to_string(event)?;
        info!(event_id = %event.event_id, name = %event.name, group = %event.group, key = %event.key,
            "published event {}", json);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use crate::core::events::DomainEvent;
    use crate::core::domain::Configuration;
    use crate::gateway::factory;

    #[tokio::test]
    async fn test_should_publish_to_log() {
        let event = DomainEvent::added("test-name", "group", "key", &HashMap::new(), &1).expect("build event");
        let publisher = factory::create_publisher(&Configuration::new("test"));
        publisher.publish(&event).await.expect("should publish");
    }
}
