//! ProductDao trait.

use crate::transfer::ProductTransferObject;
use async_trait::async_trait;
use northwind_core::{NorthwindResult, NorthwindStream};

/// Data access for the `Products` table.
#[async_trait]
pub trait ProductDao: Send + Sync {
    /// Finds a product by id.
    async fn find(&self, product_id: i32) -> NorthwindResult<ProductTransferObject>;

    /// Streams a window of products ordered by id.
    fn select(&self, offset: i64, limit: i64) -> NorthwindResult<NorthwindStream<ProductTransferObject>>;

    /// Streams products whose name is one of `names`.
    fn select_by_name(&self, names: &[String]) -> NorthwindResult<NorthwindStream<ProductTransferObject>>;

    /// Streams products belonging to any of `category_ids`.
    fn select_by_category(&self, category_ids: &[i32]) -> NorthwindResult<NorthwindStream<ProductTransferObject>>;

    /// Inserts a product and returns its generated id.
    async fn insert(&self, product: &ProductTransferObject) -> NorthwindResult<i32>;

    /// Replaces every column of the product identified by `product.id`.
    async fn update(&self, product: &ProductTransferObject) -> NorthwindResult<bool>;

    /// Deletes a product. Returns `true` if a row was removed.
    async fn delete(&self, product_id: i32) -> NorthwindResult<bool>;
}
