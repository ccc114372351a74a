//! SQLite implementation of [`ProductDao`].

use super::{ensure_not_empty, stream_matching, stream_window, to_id};
use crate::dao::ProductDao;
use crate::transfer::ProductTransferObject;
use crate::DatabasePool;
use async_trait::async_trait;
use northwind_core::{ensure_positive_id, NorthwindError, NorthwindResult, NorthwindStream, Pagination};
use std::sync::Arc;
use tracing::{debug, info};

macro_rules! product_columns {
    () => {
        "ProductID AS id, ProductName AS name, SupplierID AS supplier_id, CategoryID AS category_id, \
         QuantityPerUnit AS quantity_per_unit, UnitPrice AS unit_price, UnitsInStock AS units_in_stock, \
         UnitsOnOrder AS units_on_order, ReorderLevel AS reorder_level, Discontinued AS discontinued"
    };
}

const SELECT_PRODUCTS: &str = concat!("SELECT ", product_columns!(), " FROM Products");
const FIND_PRODUCT: &str = concat!("SELECT ", product_columns!(), " FROM Products WHERE ProductID = ?");
const SELECT_PRODUCT_WINDOW: &str = concat!(
    "SELECT ",
    product_columns!(),
    " FROM Products ORDER BY ProductID LIMIT ? OFFSET ?"
);

/// SQLite-backed product DAO.
#[derive(Clone)]
pub struct SqliteProductDao {
    pool: Arc<DatabasePool>,
}

impl SqliteProductDao {
    /// Creates a new SQLite product DAO.
    #[must_use]
    pub fn new(pool: Arc<DatabasePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductDao for SqliteProductDao {
    async fn find(&self, product_id: i32) -> NorthwindResult<ProductTransferObject> {
        ensure_positive_id(product_id)?;
        debug!("Finding product by id: {}", product_id);

        sqlx::query_as::<_, ProductTransferObject>(FIND_PRODUCT)
            .bind(product_id)
            .fetch_optional(self.pool.inner())
            .await?
            .ok_or_else(|| NorthwindError::not_found("Product", product_id))
    }

    fn select(&self, offset: i64, limit: i64) -> NorthwindResult<NorthwindStream<ProductTransferObject>> {
        let page = Pagination::new(offset, limit)?;
        debug!("Selecting products: offset={}, limit={}", page.offset, page.limit);

        Ok(stream_window(
            self.pool.inner().clone(),
            SELECT_PRODUCT_WINDOW,
            page.offset,
            page.limit,
        ))
    }

    fn select_by_name(&self, names: &[String]) -> NorthwindResult<NorthwindStream<ProductTransferObject>> {
        ensure_not_empty(names, "names")?;
        debug!("Selecting products by {} name(s)", names.len());

        Ok(stream_matching(
            self.pool.inner().clone(),
            SELECT_PRODUCTS,
            "ProductName",
            "ProductID",
            names.to_vec(),
        ))
    }

    fn select_by_category(&self, category_ids: &[i32]) -> NorthwindResult<NorthwindStream<ProductTransferObject>> {
        ensure_not_empty(category_ids, "categories")?;
        debug!("Selecting products by {} category id(s)", category_ids.len());

        Ok(stream_matching(
            self.pool.inner().clone(),
            SELECT_PRODUCTS,
            "CategoryID",
            "ProductID",
            category_ids.to_vec(),
        ))
    }

    async fn insert(&self, product: &ProductTransferObject) -> NorthwindResult<i32> {
        debug!("Inserting product: {}", product.name);

        let result = sqlx::query(
            r#"
            INSERT INTO Products (ProductName, SupplierID, CategoryID, QuantityPerUnit, UnitPrice,
                                  UnitsInStock, UnitsOnOrder, ReorderLevel, Discontinued)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&product.name)
        .bind(product.supplier_id)
        .bind(product.category_id)
        .bind(&product.quantity_per_unit)
        .bind(product.unit_price)
        .bind(product.units_in_stock)
        .bind(product.units_on_order)
        .bind(product.reorder_level)
        .bind(product.discontinued)
        .execute(self.pool.inner())
        .await?;

        let id = to_id(result.last_insert_rowid())?;
        info!("Product created: {} ({})", product.name, id);
        Ok(id)
    }

    async fn update(&self, product: &ProductTransferObject) -> NorthwindResult<bool> {
        ensure_positive_id(product.id)?;
        debug!("Updating product: {}", product.id);

        let result = sqlx::query(
            r#"
            UPDATE Products
            SET ProductName = ?, SupplierID = ?, CategoryID = ?, QuantityPerUnit = ?, UnitPrice = ?,
                UnitsInStock = ?, UnitsOnOrder = ?, ReorderLevel = ?, Discontinued = ?
            WHERE ProductID = ?
            "#,
        )
        .bind(&product.name)
        .bind(product.supplier_id)
        .bind(product.category_id)
        .bind(&product.quantity_per_unit)
        .bind(product.unit_price)
        .bind(product.units_in_stock)
        .bind(product.units_on_order)
        .bind(product.reorder_level)
        .bind(product.discontinued)
        .bind(product.id)
        .execute(self.pool.inner())
        .await?;

        let updated = result.rows_affected() > 0;
        if updated {
            info!("Product updated: {}", product.id);
        }
        Ok(updated)
    }

    async fn delete(&self, product_id: i32) -> NorthwindResult<bool> {
        ensure_positive_id(product_id)?;
        debug!("Deleting product: {}", product_id);

        let result = sqlx::query("DELETE FROM Products WHERE ProductID = ?")
            .bind(product_id)
            .execute(self.pool.inner())
            .await?;

        let deleted = result.rows_affected() > 0;
        if deleted {
            info!("Product deleted: {}", product_id);
        }
        Ok(deleted)
    }
}
