use crate::cart::factory::create_cart_service;
use crate::checkout::domain::CheckoutService;
use crate::checkout::domain::service::CheckoutServiceImpl;
use crate::core::domain::Configuration;
use crate::core::repository::RepositoryStore;
use crate::gateway::factory::create_publisher;

pub fn create_checkout_service(config: &Configuration, store: &RepositoryStore) -> Box<dyn CheckoutService> {
    let cart_svc = create_cart_service(config, store);
    let publisher = create_publisher(config);
    Box::new(CheckoutServiceImpl::new(config, cart_svc, publisher))
}
