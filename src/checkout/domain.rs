use async_trait::async_trait;
use crate::core::library::ShopResult;

pub mod service;

#[async_trait]
pub trait CheckoutService: Sync + Send {
    // empties the cart; there is no payment step and an empty cart checks out too
    async fn checkout(&self) -> ShopResult<()>;
}
