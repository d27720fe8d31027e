use std::sync::Arc;
use crate::books::repository::BookRepository;
use crate::books::repository::memory_book_repository::MemoryBookRepository;

pub fn create_book_repository() -> Arc<dyn BookRepository> {
    Arc::new(MemoryBookRepository::seeded())
}
