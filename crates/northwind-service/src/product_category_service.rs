//! Product category service trait definition.

use async_trait::async_trait;
use northwind_core::{NorthwindResult, NorthwindStream, ProductCategory};

/// Product category service trait.
#[async_trait]
pub trait ProductCategoryService: Send + Sync {
    /// Streams a window of categories ordered by id.
    fn get_categories(&self, offset: i64, limit: i64) -> NorthwindResult<NorthwindStream<ProductCategory>>;

    /// Streams categories whose name is one of `names`.
    fn get_categories_by_name(&self, names: &[String]) -> NorthwindResult<NorthwindStream<ProductCategory>>;

    /// Gets a category by ID, `None` if it does not exist.
    async fn try_get_category(&self, category_id: i32) -> NorthwindResult<Option<ProductCategory>>;

    /// Creates a category and returns its id.
    async fn create_category(&self, category: ProductCategory) -> NorthwindResult<i32>;

    /// Replaces the category with id `category_id`. Returns `false` if absent.
    async fn update_category(&self, category_id: i32, category: ProductCategory) -> NorthwindResult<bool>;

    /// Deletes a category. Returns `false` if absent.
    async fn delete_category(&self, category_id: i32) -> NorthwindResult<bool>;
}
