//! ProductCategoryDao trait.

use crate::transfer::ProductCategoryTransferObject;
use async_trait::async_trait;
use northwind_core::{NorthwindResult, NorthwindStream};

/// Data access for the `Categories` table.
#[async_trait]
pub trait ProductCategoryDao: Send + Sync {
    /// Finds a category by id.
    async fn find(&self, category_id: i32) -> NorthwindResult<ProductCategoryTransferObject>;

    /// Streams a window of categories ordered by id.
    fn select(
        &self,
        offset: i64,
        limit: i64,
    ) -> NorthwindResult<NorthwindStream<ProductCategoryTransferObject>>;

    /// Streams categories whose name is one of `names`.
    fn select_by_name(
        &self,
        names: &[String],
    ) -> NorthwindResult<NorthwindStream<ProductCategoryTransferObject>>;

    /// Inserts a category and returns its generated id.
    async fn insert(&self, category: &ProductCategoryTransferObject) -> NorthwindResult<i32>;

    /// Replaces every column of the category identified by `category.id`.
    async fn update(&self, category: &ProductCategoryTransferObject) -> NorthwindResult<bool>;

    /// Deletes a category. Returns `true` if a row was removed.
    async fn delete(&self, category_id: i32) -> NorthwindResult<bool>;
}
