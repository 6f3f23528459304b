//! Cross-crate traits.

pub mod repository;

pub use repository::Repository;
