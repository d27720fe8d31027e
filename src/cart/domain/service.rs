use std::collections::HashMap;
use std::sync::Arc;
use async_trait::async_trait;
use tracing::{debug, info, warn};
use crate::books::dto::BookDto;
use crate::cart::domain::CartService;
use crate::cart::domain::model::CartEntryEntity;
use crate::cart::dto::CartItemDto;
use crate::cart::repository::CartRepository;
use crate::catalog::domain::CatalogService;
use crate::core::domain::Configuration;
use crate::core::events::DomainEvent;
use crate::core::library::{CartAction, ShopError, ShopResult};
use crate::gateway::events::EventPublisher;

pub const BOOK_NOT_FOUND: &str = "Book not found";

pub struct CartServiceImpl {
    cart_repository: Arc<dyn CartRepository>,
    catalog_service: Box<dyn CatalogService>,
    events_publisher: Box<dyn EventPublisher>,
}

impl CartServiceImpl {
    pub fn new(_config: &Configuration, cart_repository: Arc<dyn CartRepository>,
               catalog_service: Box<dyn CatalogService>,
               events_publisher: Box<dyn EventPublisher>) -> Self {
        Self {
            cart_repository,
            catalog_service,
            events_publisher,
        }
    }

    async fn resolve(&self, entries: &[CartEntryEntity]) -> ShopResult<Vec<CartItemDto>> {
        if entries.is_empty() {
            return Ok(vec![]);
        }
        let books: HashMap<i64, BookDto> = self.catalog_service.list_books(None).await?
            .into_iter().map(|b| (b.id, b)).collect();
        Ok(entries.iter().filter_map(|entry| {
            match books.get(&entry.book_id) {
                Some(book) => Some(CartItemDto::new(book.clone(), entry.quantity)),
                None => {
                    warn!(book_id = entry.book_id, "cart entry refers to a book missing from the catalog");
                    None
                }
            }
        }).collect())
    }

    // Runs after the cart has changed; failures are logged, not returned.
    async fn publish(&self, event: serde_json::Result<DomainEvent>) {
        let res = match event {
            Ok(event) => self.events_publisher.publish(&event).await,
            Err(err) => Err(ShopError::from(err)),
        };
        if let Err(err) = res {
            warn!(error = %err, "failed to publish cart event");
        }
    }
}

#[async_trait]
impl CartService for CartServiceImpl {
    async fn add_to_cart(&self, book_id: i64) -> ShopResult<usize> {
        let book = self.catalog_service.find_book_by_id(book_id).await.map_err(|err| match err {
            ShopError::NotFound { .. } => ShopError::not_found(BOOK_NOT_FOUND),
            other => other,
        })?;
        let count = self.cart_repository.add(book.id).await?;
        info!(book_id = book.id, count, "added book to cart");
        self.publish(DomainEvent::added(
            "cart_item_added", "cart", book.id.to_string().as_str(), &HashMap::new(), &book)).await;
        Ok(count)
    }

    async fn get_cart(&self) -> ShopResult<Vec<CartItemDto>> {
        let entries = self.cart_repository.entries().await?;
        self.resolve(&entries).await
    }

    async fn update_cart(&self, book_id: i64, action: CartAction) -> ShopResult<Vec<CartItemDto>> {
        let res = self.cart_repository.update(book_id, action).await?;
        if res.matched && action != CartAction::Unknown {
            info!(book_id, action = %action, "updated cart entry");
            let quantity = res.entries.iter().find(|e| e.book_id == book_id).map_or(0, |e| e.quantity);
            self.publish(DomainEvent::updated(
                "cart_item_updated", "cart", book_id.to_string().as_str(),
                &HashMap::from([("action".to_string(), action.to_string())]), &quantity)).await;
        } else {
            debug!(book_id, action = %action, matched = res.matched, "cart left unchanged");
        }
        self.resolve(&res.entries).await
    }

    async fn clear_cart(&self) -> ShopResult<Vec<CartItemDto>> {
        let removed = self.cart_repository.clear().await?;
        self.resolve(&removed).await
    }
}
