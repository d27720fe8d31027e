use std::collections::HashMap;
use async_trait::async_trait;
use tracing::{info, warn};
use crate::cart::domain::CartService;
use crate::checkout::domain::CheckoutService;
use crate::core::domain::Configuration;
use crate::core::events::DomainEvent;
use crate::core::library::{ShopError, ShopResult};
use crate::gateway::events::EventPublisher;

pub struct CheckoutServiceImpl {
    env_name: String,
    cart_service: Box<dyn CartService>,
    events_publisher: Box<dyn EventPublisher>,
}

impl CheckoutServiceImpl {
    pub fn new(config: &Configuration, cart_service: Box<dyn CartService>,
               events_publisher: Box<dyn EventPublisher>) -> Self {
        Self {
            env_name: config.env_name.to_string(),
            cart_service,
            events_publisher,
        }
    }
}

#[async_trait]
impl CheckoutService for CheckoutServiceImpl {
    async fn checkout(&self) -> ShopResult<()> {
        let items = self.cart_service.clear_cart().await?;
        info!(env = %self.env_name, items = items.len(), "checked out cart");
        // the cart is already empty here; publish failures are only logged
        let published = match DomainEvent::deleted("cart_checked_out", "checkout", "cart", &HashMap::new(), &items) {
            Ok(event) => self.events_publisher.publish(&event).await,
            Err(err) => Err(ShopError::from(err)),
        };
        if let Err(err) = published {
            warn!(error = %err, "failed to publish checkout event");
        }
        Ok(())
    }
}
