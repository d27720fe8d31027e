use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use crate::books::factory::create_book_repository;
use crate::books::repository::BookRepository;
use crate::cart::factory::create_cart_repository;
use crate::cart::repository::CartRepository;
use crate::core::library::ShopResult;

#[async_trait]
pub trait Repository<Entity>: Sync + Send {
    // get an entity
    async fn get(&self, id: i64) -> ShopResult<Entity>;

    // find entities whose attributes match every predicate entry, in stored order
    async fn query(&self, predicate: &HashMap::<String, String>) -> ShopResult<Vec<Entity>>;
}

// RepositoryStore bundles the process-wide stores shared by every request.
#[derive(Clone)]
pub struct RepositoryStore {
    pub books: Arc<dyn BookRepository>,
    pub cart: Arc<dyn CartRepository>,
}

impl RepositoryStore {
    pub fn in_memory() -> Self {
        Self {
            books: create_book_repository(),
            cart: create_cart_repository(),
        }
    }
}
