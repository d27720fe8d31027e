pub mod model;
pub mod service;

use async_trait::async_trait;
use crate::cart::dto::CartItemDto;
use crate::core::library::{CartAction, ShopResult};

#[async_trait]
pub trait CartService: Sync + Send {
    async fn add_to_cart(&self, book_id: i64) -> ShopResult<usize>;
    async fn get_cart(&self) -> ShopResult<Vec<CartItemDto>>;
    async fn update_cart(&self, book_id: i64, action: CartAction) -> ShopResult<Vec<CartItemDto>>;
    // empties the cart and returns the items it held
    async fn clear_cart(&self) -> ShopResult<Vec<CartItemDto>>;
}
