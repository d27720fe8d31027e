use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;

// BookEntity is a purchasable book held in the catalog store. Entities are
// created once when the store is seeded and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookEntity {
    pub book_id: i64,
    pub title: String,
    pub author: String,
    pub price: f64,
    pub category: String,
    pub image: String,
}

impl BookEntity {
    pub fn new(book_id: i64, title: &str, author: &str, price: f64, category: &str) -> Self {
        Self {
            book_id,
            title: title.to_string(),
            author: author.to_string(),
            price,
            category: category.to_string(),
            image: placeholder_image(title),
        }
    }

    pub fn with_cover(mut self, caption: &str) -> Self {
        self.image = placeholder_image(caption);
        self
    }

    // matches an attribute by name, used by repository queries
    pub fn attribute_matches(&self, name: &str, value: &str) -> bool {
        match name {
            "category" => self.category == value,
            "title" => self.title == value,
            "author" => self.author == value,
            _ => false,
        }
    }
}

// Cover image rendered by placehold.co with the title as caption.
pub fn placeholder_image(caption: &str) -> String {
    format!("https://placehold.co/300x400/34495e/ffffff?text={}", caption.replace(' ', "+"))
}

impl Identifiable for BookEntity {
    fn id(&self) -> i64 {
        self.book_id
    }
}
