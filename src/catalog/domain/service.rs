use std::collections::HashMap;
use std::sync::Arc;
use async_trait::async_trait;
use tracing::debug;
use crate::books::dto::BookDto;
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::core::domain::Configuration;
use crate::core::library::{ShopResult, ALL_CATEGORIES};

pub struct CatalogServiceImpl {
    book_repository: Arc<dyn BookRepository>,
}

impl CatalogServiceImpl {
    pub fn new(_config: &Configuration, book_repository: Arc<dyn BookRepository>) -> Self {
        Self {
            book_repository,
        }
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn list_books(&self, category: Option<&str>) -> ShopResult<Vec<BookDto>> {
        let books = match category {
            None | Some("") | Some(ALL_CATEGORIES) => self.book_repository.find_all().await?,
            Some(category) => {
                self.book_repository.query(
                    &HashMap::from([("category".to_string(), category.to_string())])).await?
            }
        };
        debug!(category = ?category, count = books.len(), "listed books");
        Ok(books.iter().map(BookDto::from).collect())
    }

    async fn find_book_by_id(&self, id: i64) -> ShopResult<BookDto> {
        self.book_repository.get(id).await.map(|b| BookDto::from(&b))
    }
}


#[cfg(test)]
mod tests {
    use async_once::AsyncOnce;
    use lazy_static::lazy_static;
    use crate::catalog::domain::CatalogService;
    use crate::catalog::factory;
    use crate::core::domain::Configuration;
    use crate::core::library::ShopError;
    use crate::core::repository::RepositoryStore;

    lazy_static! {
        static ref SUT_SVC: AsyncOnce<Box<dyn CatalogService>> = AsyncOnce::new(async {
                factory::create_catalog_service(&Configuration::new("test"), &RepositoryStore::in_memory())
            });
    }

    #[tokio::test]
    async fn test_should_list_all_books() {
        let catalog_svc = SUT_SVC.get().await;

        for filter in [None, Some(""), Some("all")] {
            let books = catalog_svc.list_books(filter).await.expect("should list books");
            assert_eq!(8, books.len());
            assert_eq!(1, books[0].id);
            assert_eq!(8, books[7].id);
        }
    }

    #[tokio::test]
    async fn test_should_filter_by_category() {
        let catalog_svc = SUT_SVC.get().await;

        let books = catalog_svc.list_books(Some("fantasy")).await.expect("should list books");
        let ids: Vec<i64> = books.iter().map(|b| b.id).collect();
        assert_eq!(vec![5, 6], ids);
        assert!(books.iter().all(|b| b.category == "fantasy"));

        let fiction = catalog_svc.list_books(Some("fiction")).await.expect("should list books");
        assert_eq!(4, fiction.len());
    }

    #[tokio::test]
    async fn test_should_return_empty_for_unknown_category() {
        let catalog_svc = SUT_SVC.get().await;

        let books = catalog_svc.list_books(Some("poetry")).await.expect("should list books");
        assert!(books.is_empty());
        let books = catalog_svc.list_books(Some("ALL")).await.expect("should list books");
        assert!(books.is_empty());
    }

    #[tokio::test]
    async fn test_should_find_book_by_id() {
        let catalog_svc = SUT_SVC.get().await;

        let book = catalog_svc.find_book_by_id(3).await.expect("should return book");
        assert_eq!("1984", book.title.as_str());
        assert_eq!("George Orwell", book.author.as_str());
        let missing = catalog_svc.find_book_by_id(42).await;
        assert!(matches!(missing, Err(ShopError::NotFound { .. })));
    }
}
