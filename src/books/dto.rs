use serde::{Deserialize, Serialize};
use crate::books::domain::model::BookEntity;

// BookDto is the wire form of a catalog book
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDto {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub price: f64,
    pub category: String,
    pub image: String,
}

impl BookDto {
    pub fn new(id: i64, title: &str, author: &str, price: f64, category: &str, image: &str) -> BookDto {
        BookDto {
            id,
            title: title.to_string(),
            author: author.to_string(),
            price,
            category: category.to_string(),
            image: image.to_string(),
        }
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            id: other.book_id,
            title: other.title.to_string(),
            author: other.author.to_string(),
            price: other.price,
            category: other.category.to_string(),
            image: other.image.to_string(),
        }
    }
}
