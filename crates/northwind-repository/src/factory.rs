//! Data access factory.
//!
//! Hands out the DAO set for one backing store. The server builds a single
//! factory at startup and passes its DAOs to the services explicitly.

use crate::dao::{
    EmployeeDao, ProductCategoryDao, ProductDao, SqliteEmployeeDao, SqliteProductCategoryDao,
    SqliteProductDao,
};
use crate::DatabasePool;
use std::sync::Arc;

/// Produces the DAOs of one backing store.
pub trait DataAccessFactory: Send + Sync {
    /// Returns the employee DAO.
    fn employee_dao(&self) -> Arc<dyn EmployeeDao>;

    /// Returns the product DAO.
    fn product_dao(&self) -> Arc<dyn ProductDao>;

    /// Returns the product category DAO.
    fn product_category_dao(&self) -> Arc<dyn ProductCategoryDao>;
}

/// Factory for the SQLite DAOs, all sharing one pool.
#[derive(Debug, Clone)]
pub struct SqliteDataAccessFactory {
    pool: Arc<DatabasePool>,
}

impl SqliteDataAccessFactory {
    /// Creates a new factory over `pool`.
    #[must_use]
    pub fn new(pool: Arc<DatabasePool>) -> Self {
        Self { pool }
    }
}

impl DataAccessFactory for SqliteDataAccessFactory {
    fn employee_dao(&self) -> Arc<dyn EmployeeDao> {
        Arc::new(SqliteEmployeeDao::new(Arc::clone(&self.pool)))
    }

    fn product_dao(&self) -> Arc<dyn ProductDao> {
        Arc::new(SqliteProductDao::new(Arc::clone(&self.pool)))
    }

    fn product_category_dao(&self) -> Arc<dyn ProductCategoryDao> {
        Arc::new(SqliteProductCategoryDao::new(Arc::clone(&self.pool)))
    }
}
