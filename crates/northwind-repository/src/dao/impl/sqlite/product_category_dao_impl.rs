//! SQLite implementation of [`ProductCategoryDao`].

use super::{ensure_not_empty, stream_matching, stream_window, to_id};
use crate::dao::ProductCategoryDao;
use crate::transfer::ProductCategoryTransferObject;
use crate::DatabasePool;
use async_trait::async_trait;
use northwind_core::{ensure_positive_id, NorthwindError, NorthwindResult, NorthwindStream, Pagination};
use std::sync::Arc;
use tracing::{debug, info};

macro_rules! category_columns {
    () => {
        "CategoryID AS id, CategoryName AS name, Description AS description, Picture AS picture"
    };
}

const SELECT_CATEGORIES: &str = concat!("SELECT ", category_columns!(), " FROM Categories");
const FIND_CATEGORY: &str = concat!("SELECT ", category_columns!(), " FROM Categories WHERE CategoryID = ?");
const SELECT_CATEGORY_WINDOW: &str = concat!(
    "SELECT ",
    category_columns!(),
    " FROM Categories ORDER BY CategoryID LIMIT ? OFFSET ?"
);

/// SQLite-backed product category DAO.
#[derive(Clone)]
pub struct SqliteProductCategoryDao {
    pool: Arc<DatabasePool>,
}

impl SqliteProductCategoryDao {
    /// Creates a new SQLite product category DAO.
    #[must_use]
    pub fn new(pool: Arc<DatabasePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductCategoryDao for SqliteProductCategoryDao {
    async fn find(&self, category_id: i32) -> NorthwindResult<ProductCategoryTransferObject> {
        ensure_positive_id(category_id)?;
        debug!("Finding category by id: {}", category_id);

        sqlx::query_as::<_, ProductCategoryTransferObject>(FIND_CATEGORY)
            .bind(category_id)
            .fetch_optional(self.pool.inner())
            .await?
            .ok_or_else(|| NorthwindError::not_found("ProductCategory", category_id))
    }

    fn select(
        &self,
        offset: i64,
        limit: i64,
    ) -> NorthwindResult<NorthwindStream<ProductCategoryTransferObject>> {
        let page = Pagination::new(offset, limit)?;
        debug!("Selecting categories: offset={}, limit={}", page.offset, page.limit);

        Ok(stream_window(
            self.pool.inner().clone(),
            SELECT_CATEGORY_WINDOW,
            page.offset,
            page.limit,
        ))
    }

    fn select_by_name(
        &self,
        names: &[String],
    ) -> NorthwindResult<NorthwindStream<ProductCategoryTransferObject>> {
        ensure_not_empty(names, "names")?;
        debug!("Selecting categories by {} name(s)", names.len());

        Ok(stream_matching(
            self.pool.inner().clone(),
            SELECT_CATEGORIES,
            "CategoryName",
            "CategoryID",
            names.to_vec(),
        ))
    }

    async fn insert(&self, category: &ProductCategoryTransferObject) -> NorthwindResult<i32> {
        debug!("Inserting category: {}", category.name);

        let result = sqlx::query(
            "INSERT INTO Categories (CategoryName, Description, Picture) VALUES (?, ?, ?)",
        )
        .bind(&category.name)
        .bind(&category.description)
        .bind(&category.picture)
        .execute(self.pool.inner())
        .await?;

        let id = to_id(result.last_insert_rowid())?;
        info!("Category created: {} ({})", category.name, id);
        Ok(id)
    }

    async fn update(&self, category: &ProductCategoryTransferObject) -> NorthwindResult<bool> {
        ensure_positive_id(category.id)?;
        debug!("Updating category: {}", category.id);

        let result = sqlx::query(
            "UPDATE Categories SET CategoryName = ?, Description = ?, Picture = ? WHERE CategoryID = ?",
        )
        .bind(&category.name)
        .bind(&category.description)
        .bind(&category.picture)
        .bind(category.id)
        .execute(self.pool.inner())
        .await?;

        let updated = result.rows_affected() > 0;
        if updated {
            info!("Category updated: {}", category.id);
        }
        Ok(updated)
    }

    async fn delete(&self, category_id: i32) -> NorthwindResult<bool> {
        ensure_positive_id(category_id)?;
        debug!("Deleting category: {}", category_id);

        let result = sqlx::query("DELETE FROM Categories WHERE CategoryID = ?")
            .bind(category_id)
            .execute(self.pool.inner())
            .await?;

        let deleted = result.rows_affected() > 0;
        if deleted {
            info!("Category deleted: {}", category_id);
        }
        Ok(deleted)
    }
}
