use async_trait::async_trait;
use tokio::sync::Mutex;
use crate::cart::domain::model::{CartEntity, CartEntryEntity, CartUpdate};
use crate::cart::repository::CartRepository;
use crate::core::library::{CartAction, ShopResult};

// MemoryCartRepository holds the process-wide cart behind a lock; each call
// holds it for its whole read-modify-write.
#[derive(Debug, Default)]
pub struct MemoryCartRepository {
    cart: Mutex<CartEntity>,
}

impl MemoryCartRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CartRepository for MemoryCartRepository {
    async fn add(&self, book_id: i64) -> ShopResult<usize> {
        let mut cart = self.cart.lock().await;
        Ok(cart.add(book_id))
    }

    async fn update(&self, book_id: i64, action: CartAction) -> ShopResult<CartUpdate> {
        let mut cart = self.cart.lock().await;
        let matched = cart.apply(book_id, action);
        Ok(CartUpdate { matched, entries: cart.entries().to_vec() })
    }

    async fn entries(&self) -> ShopResult<Vec<CartEntryEntity>> {
        let cart = self.cart.lock().await;
        Ok(cart.entries().to_vec())
    }

    async fn clear(&self) -> ShopResult<Vec<CartEntryEntity>> {
        let mut cart = self.cart.lock().await;
        let removed = cart.entries().to_vec();
        cart.clear();
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use crate::cart::repository::CartRepository;
    use crate::cart::repository::memory_cart_repository::MemoryCartRepository;
    use crate::core::library::CartAction;

    #[tokio::test]
    async fn test_should_add_and_list_entries() {
        let repo = MemoryCartRepository::new();
        assert_eq!(1, repo.add(1).await.expect("should add"));
        assert_eq!(2, repo.add(2).await.expect("should add"));
        assert_eq!(2, repo.add(1).await.expect("should add"));
        let entries = repo.entries().await.expect("should list");
        assert_eq!(2, entries[0].quantity);
        assert_eq!(1, entries[1].quantity);
    }

    #[tokio::test]
    async fn test_should_update_and_return_snapshot() {
        let repo = MemoryCartRepository::new();
        let _ = repo.add(3).await.expect("should add");
        let res = repo.update(3, CartAction::Increase).await.expect("should update");
        assert!(res.matched);
        assert_eq!(2, res.entries[0].quantity);
        let res = repo.update(4, CartAction::Remove).await.expect("should update");
        assert!(!res.matched);
        assert_eq!(1, res.entries.len());
    }

    #[tokio::test]
    async fn test_should_clear() {
        let repo = MemoryCartRepository::new();
        let _ = repo.add(3).await.expect("should add");
        let removed = repo.clear().await.expect("should clear");
        assert_eq!(1, removed.len());
        assert!(repo.clear().await.expect("should clear").is_empty());
        assert!(repo.entries().await.expect("should list").is_empty());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_should_not_lose_concurrent_adds() {
        let repo = Arc::new(MemoryCartRepository::new());
        let mut handles = vec![];
        for i in 0..200 {
            let repo = repo.clone();
            handles.push(tokio::spawn(async move {
                repo.add(if i % 2 == 0 { 1 } else { 2 }).await
            }));
        }
        for handle in handles {
            let _ = handle.await.expect("task should finish").expect("should add");
        }
        let entries = repo.entries().await.expect("should list");
        assert_eq!(2, entries.len());
        assert_eq!(200, entries.iter().map(|e| e.quantity).sum::<i64>());
        assert!(entries.iter().all(|e| e.quantity == 100));
    }
}
