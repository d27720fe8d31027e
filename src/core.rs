pub mod command;
pub mod controller;
pub mod domain;
pub mod events;
pub mod library;
pub mod repository;
pub mod router;
