use std::collections::HashMap;

use async_trait::async_trait;

use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::domain::Identifiable;
use crate::core::library::{ShopError, ShopResult};
use crate::core::repository::Repository;

// MemoryBookRepository keeps the catalog in insertion order. The records are
// fixed at construction and only ever read, so no lock is needed.
#[derive(Debug)]
pub struct MemoryBookRepository {
    books: Vec<BookEntity>,
}

impl MemoryBookRepository {
    pub fn new(books: Vec<BookEntity>) -> Self {
        Self {
            books,
        }
    }

    pub fn seeded() -> Self {
        Self::new(seed_books())
    }
}

pub fn seed_books() -> Vec<BookEntity> {
    vec![
        BookEntity::new(1, "The Great Gatsby", "F. Scott Fitzgerald", 12.99, "fiction"),
        BookEntity::new(2, "Mockingbird", "Harper Lee", 11.50, "fiction"),
        BookEntity::new(3, "1984", "George Orwell", 10.25, "fiction"),
        BookEntity::new(4, "Pride and Prejudice", "Jane Austen", 9.99, "fiction"),
        BookEntity::new(5, "The Hobbit", "J.R.R. Tolkien", 14.95, "fantasy"),
        BookEntity::new(6, "Harry Potter and the Philosopher's Stone", "J.K. Rowling", 15.99, "fantasy")
            .with_cover("Harry Potter"),
        BookEntity::new(7, "The Diary of a Young Girl", "Anne Frank", 8.75, "non-fiction")
            .with_cover("Diary of a Young Girl"),
        BookEntity::new(8, "Sapiens: A Brief History of Humankind", "Yuval Noah Harari", 18.99, "non-fiction")
            .with_cover("Sapiens"),
    ]
}

#[async_trait]
impl Repository<BookEntity> for MemoryBookRepository {
    async fn get(&self, id: i64) -> ShopResult<BookEntity> {
        self.books.iter()
            .find(|b| b.id() == id)
            .cloned()
            .ok_or_else(|| ShopError::not_found(format!("book with id {} not found", id).as_str()))
    }

    async fn query(&self, predicate: &HashMap<String, String>) -> ShopResult<Vec<BookEntity>> {
        Ok(self.books.iter()
            .filter(|b| predicate.iter().all(|(k, v)| b.attribute_matches(k, v)))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl BookRepository for MemoryBookRepository {
    async fn find_all(&self) -> ShopResult<Vec<BookEntity>> {
        Ok(self.books.clone())
    }
}
