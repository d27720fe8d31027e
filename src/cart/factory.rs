use std::sync::Arc;
use crate::cart::domain::CartService;
use crate::cart::domain::service::CartServiceImpl;
use crate::cart::repository::CartRepository;
use crate::cart::repository::memory_cart_repository::MemoryCartRepository;
use crate::catalog::factory::create_catalog_service;
use crate::core::domain::Configuration;
use crate::core::repository::RepositoryStore;
use crate::gateway::factory::create_publisher;

pub fn create_cart_repository() -> Arc<dyn CartRepository> {
    Arc::new(MemoryCartRepository::new())
}

pub fn create_cart_service(config: &Configuration, store: &RepositoryStore) -> Box<dyn CartService> {
    let catalog_svc = create_catalog_service(config, store);
    let publisher = create_publisher(config);
    Box::new(CartServiceImpl::new(config, store.cart.clone(), catalog_svc, publisher))
}
