//! # Northwind Repository
//!
//! Data access layer:
//!
//! ```text
//! Service
//!   ↓  Arc<dyn ProductDao>      (DAO interface)
//! SqliteProductDao              (DAO impl: SQLite / SQLx)
//!   ↓
//! SQLite
//! ```
//!
//! ## Structure
//!
//! ```text
//! src/
//!   pool.rs                          ← DatabasePool
//!   factory.rs                       ← DataAccessFactory
//!   transfer/                        ← row records
//!   dao/
//!     employee_dao.rs                ← EmployeeDao trait
//!     product_dao.rs                 ← ProductDao trait
//!     product_category_dao.rs        ← ProductCategoryDao trait
//!     impl/
//!       sqlite/                      ← SQLite implementations
//! ```

pub mod dao;
pub mod factory;
pub mod pool;
pub mod transfer;

pub use dao::{
    EmployeeDao, ProductCategoryDao, ProductDao, SqliteEmployeeDao, SqliteProductCategoryDao,
    SqliteProductDao,
};
pub use factory::{DataAccessFactory, SqliteDataAccessFactory};
pub use pool::*;
pub use transfer::*;
