//! Shared helpers for service integration tests.

#![allow(dead_code)]

use northwind_config::DatabaseConfig;
use northwind_repository::{
    DataAccessFactory, DatabasePool, EmployeeTransferObject, ProductCategoryTransferObject,
    SqliteDataAccessFactory,
};
use std::sync::Arc;

/// A migrated in-memory database and the DAOs over it.
pub struct TestDatabase {
    pub pool: Arc<DatabasePool>,
    pub factory: SqliteDataAccessFactory,
}

impl TestDatabase {
    pub async fn new() -> Self {
        let config = DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            ..DatabaseConfig::default()
        };
        let pool = Arc::new(DatabasePool::new(&config).await.expect("in-memory pool"));
        pool.run_migrations().await.expect("migrations");
        let factory = SqliteDataAccessFactory::new(Arc::clone(&pool));
        Self { pool, factory }
    }

    /// Inserts a category with the given raw picture column.
    pub async fn insert_category(&self, name: &str, picture: Option<Vec<u8>>) -> i32 {
        let category = ProductCategoryTransferObject {
            name: name.to_string(),
            picture,
            ..ProductCategoryTransferObject::default()
        };
        self.factory.product_category_dao().insert(&category).await.expect("insert category")
    }

    /// Reads a category's raw picture column.
    pub async fn category_blob(&self, id: i32) -> Option<Vec<u8>> {
        self.factory
            .product_category_dao()
            .find(id)
            .await
            .expect("category exists")
            .picture
    }

    /// Inserts an employee with the given raw photo column.
    pub async fn insert_employee(&self, last_name: &str, photo: Option<Vec<u8>>) -> i32 {
        let employee = EmployeeTransferObject {
            last_name: last_name.to_string(),
            first_name: "Test".to_string(),
            photo,
            ..EmployeeTransferObject::default()
        };
        self.factory.employee_dao().insert(&employee).await.expect("insert employee")
    }
}
