use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::core::library::CartAction;

// CartEntryEntity is one selected book. Only the identifier is kept; the book
// itself is resolved through the catalog when the cart is read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartEntryEntity {
    pub book_id: i64,
    pub quantity: i64,
}

impl CartEntryEntity {
    pub fn new(book_id: i64) -> Self {
        Self {
            book_id,
            quantity: 1,
        }
    }
}

impl Identifiable for CartEntryEntity {
    fn id(&self) -> i64 {
        self.book_id
    }
}

// CartUpdate reports the outcome of applying an action to the cart.
#[derive(Debug, Clone, PartialEq)]
pub struct CartUpdate {
    pub matched: bool,
    pub entries: Vec<CartEntryEntity>,
}

/// The shopping cart: entries in the order books were first added.
///
/// Holds at most one entry per book id and never an entry with a quantity
/// below one. An entry whose quantity would drop to zero is removed instead.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CartEntity {
    entries: Vec<CartEntryEntity>,
}

impl CartEntity {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[CartEntryEntity] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn quantity_of(&self, book_id: i64) -> Option<i64> {
        self.position(book_id).map(|i| self.entries[i].quantity)
    }

    /// Increments the entry for `book_id`, appending a new one when absent.
    /// Returns the number of entries, not the total quantity.
    pub fn add(&mut self, book_id: i64) -> usize {
        match self.position(book_id) {
            Some(i) => self.entries[i].quantity += 1,
            None => self.entries.push(CartEntryEntity::new(book_id)),
        }
        self.entries.len()
    }

    /// Applies `action` to the first entry for `book_id`. Returns false when
    /// no entry matched, in which case the cart is left untouched.
    pub fn apply(&mut self, book_id: i64, action: CartAction) -> bool {
        let i = match self.position(book_id) {
            Some(i) => i,
            None => return false,
        };
        match action {
            CartAction::Increase => {
                self.entries[i].quantity += 1;
            }
            CartAction::Decrease => {
                self.entries[i].quantity -= 1;
                if self.entries[i].quantity <= 0 {
                    self.entries.remove(i);
                }
            }
            CartAction::Remove => {
                self.entries.remove(i);
            }
            CartAction::Unknown => {}
        }
        true
    }

    pub fn clear(&mut self) {
        self.entries = Vec::new();
    }

    fn position(&self, book_id: i64) -> Option<usize> {
        self.entries.iter().position(|e| e.id() == book_id)
    }
}
