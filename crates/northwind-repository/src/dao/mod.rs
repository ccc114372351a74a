//! DAO (Data Access Object) layer.
//!
//! One trait per entity, one implementation per backing store.
//! Every DAO follows the same contract:
//!
//! - identifiers must be positive, checked before any store access
//! - collection reads take `offset >= 0` and `limit >= 1` and return a
//!   lazy stream ordered by primary key
//! - `find` reports a missing row as [`NorthwindError::NotFound`], while
//!   `update` and `delete` report it as `Ok(false)`
//!
//! [`NorthwindError::NotFound`]: northwind_core::NorthwindError::NotFound

pub mod employee_dao;
pub mod r#impl;
pub mod product_category_dao;
pub mod product_dao;

pub use employee_dao::EmployeeDao;
pub use product_category_dao::ProductCategoryDao;
pub use product_dao::ProductDao;
pub use r#impl::{SqliteEmployeeDao, SqliteProductCategoryDao, SqliteProductDao};
