//! Application builder.

use axum::Router;
use northwind_config::AppConfig;
use northwind_core::{NorthwindError, NorthwindResult};
use northwind_repository::{create_pool, DatabasePool, SqliteDataAccessFactory};
use northwind_rest::{create_router, AppState};
use std::future::Future;
use std::sync::Arc;
use tracing::info;

/// Application builder for constructing the server.
pub struct AppBuilder {
    config: Option<AppConfig>,
}

impl AppBuilder {
    /// Creates a new application builder.
    pub fn new() -> Self {
        Self { config: None }
    }

    /// Sets the configuration.
    pub fn with_config(mut self, config: AppConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Opens the database and wires DAOs, services and routes.
    ///
    /// # Errors
    ///
    /// Returns an error when the pool cannot be created or a migration fails.
    pub async fn build(self) -> NorthwindResult<App> {
        let config = self.config.unwrap_or_default();

        let pool = create_pool(&config.database).await?;
        if config.database.run_migrations {
            pool.run_migrations().await?;
        }

        let factory = SqliteDataAccessFactory::new(Arc::clone(&pool));
        let state = AppState::from_factory(&factory, pool.clone());
        let router = create_router(state, &config.server);

        Ok(App { config, pool, router })
    }
}

impl Default for AppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A fully wired application, ready to serve.
pub struct App {
    config: AppConfig,
    pool: Arc<DatabasePool>,
    router: Router,
}

impl App {
    /// Returns the HTTP router.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Returns the configuration the application was built with.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Serves HTTP until `shutdown` resolves, then closes the pool.
    ///
    /// # Errors
    ///
    /// Returns an error when the listener cannot be bound or the server fails.
    pub async fn serve<F>(self, shutdown: F) -> NorthwindResult<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = self.config.server.addr();
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| NorthwindError::Internal(format!("Failed to bind {}: {}", addr, e)))?;
        info!("Starting REST server on http://{}", addr);

        let result = axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| NorthwindError::Internal(format!("REST server error: {}", e)));

        self.pool.close().await;
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn in_memory_config() -> AppConfig {
        let mut config = AppConfig::default();
        config.database.url = "sqlite::memory:".to_string();
        config
    }

    #[test]
    fn test_app_builder_default() {
        let builder = AppBuilder::default();
        assert!(builder.config.is_none());
    }

    #[tokio::test]
    async fn test_build_runs_migrations() {
        let app = AppBuilder::new().with_config(in_memory_config()).build().await.unwrap();

        assert!(app.pool.health_check().await.is_ok());
        assert_eq!(app.config().database.url, "sqlite::memory:");
    }

    #[tokio::test]
    async fn test_build_fails_on_unreachable_database() {
        let mut config = in_memory_config();
        config.database.url = "sqlite:///nonexistent-dir/northwind.db".to_string();
        assert!(AppBuilder::new().with_config(config).build().await.is_err());
    }
}
