//! DAO implementations.
//!
//! Trait definitions live in the parent `dao/` module; implementations
//! are organized by backing store.

pub mod sqlite;

pub use sqlite::{SqliteEmployeeDao, SqliteProductCategoryDao, SqliteProductDao};
