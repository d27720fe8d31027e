use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;

// CartItemDto is the wire form of a cart entry with its book resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItemDto {
    pub book: BookDto,
    pub quantity: i64,
}

impl CartItemDto {
    pub fn new(book: BookDto, quantity: i64) -> Self {
        Self {
            book,
            quantity,
        }
    }
}
