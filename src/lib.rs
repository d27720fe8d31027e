pub mod books;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod core;
pub mod gateway;
pub mod utils;
