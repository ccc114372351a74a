//! Common test infrastructure for database integration tests.

#![allow(dead_code)]

use northwind_config::DatabaseConfig;
use northwind_repository::{
    DatabasePool, ProductCategoryTransferObject, ProductTransferObject,
};
use std::sync::Arc;

/// In-memory test database.
///
/// Every instance owns a private SQLite database with migrations applied,
/// so tests never observe each other's rows.
pub struct TestDatabase {
    pool: Arc<DatabasePool>,
}

impl TestDatabase {
    /// Creates a fresh, migrated in-memory database.
    pub async fn new() -> Self {
        let config = DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            log_queries: true,
            ..DatabaseConfig::default()
        };

        let pool = DatabasePool::new(&config)
            .await
            .expect("Failed to open in-memory database");
        pool.run_migrations()
            .await
            .expect("Failed to run migrations");

        Self {
            pool: Arc::new(pool),
        }
    }

    /// Returns a reference to the database pool.
    pub fn pool(&self) -> Arc<DatabasePool> {
        Arc::clone(&self.pool)
    }
}

pub fn product(name: &str) -> ProductTransferObject {
    ProductTransferObject {
        name: name.to_string(),
        ..ProductTransferObject::default()
    }
}

pub fn category(name: &str) -> ProductCategoryTransferObject {
    ProductCategoryTransferObject {
        name: name.to_string(),
        ..ProductCategoryTransferObject::default()
    }
}
