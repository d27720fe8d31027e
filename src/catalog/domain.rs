pub mod service;

use async_trait::async_trait;
use crate::books::dto::BookDto;
use crate::core::library::ShopResult;

#[async_trait]
pub trait CatalogService: Sync + Send {
    // lists the catalog, narrowed to one category unless the filter is absent, empty or "all"
    async fn list_books(&self, category: Option<&str>) -> ShopResult<Vec<BookDto>>;
    async fn find_book_by_id(&self, id: i64) -> ShopResult<BookDto>;
}
