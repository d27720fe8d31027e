pub mod memory_cart_repository;

use async_trait::async_trait;
use crate::cart::domain::model::{CartEntryEntity, CartUpdate};
use crate::core::library::{CartAction, ShopResult};

// Every method is one atomic step: implementations must not let another caller
// observe or interleave with a half-applied change.
#[async_trait]
pub trait CartRepository: Sync + Send {
    // adds one unit of the book and returns the resulting number of entries
    async fn add(&self, book_id: i64) -> ShopResult<usize>;

    // applies the action and returns the entries as they stand afterwards
    async fn update(&self, book_id: i64, action: CartAction) -> ShopResult<CartUpdate>;

    async fn entries(&self) -> ShopResult<Vec<CartEntryEntity>>;

    // empties the cart and returns the entries it held
    async fn clear(&self) -> ShopResult<Vec<CartEntryEntity>>;
}
