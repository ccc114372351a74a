//! Product service trait definition.

use async_trait::async_trait;
use northwind_core::{NorthwindResult, NorthwindStream, Product};

/// Product service trait.
#[async_trait]
pub trait ProductService: Send + Sync {
    /// Streams a window of products ordered by id.
    fn get_products(&self, offset: i64, limit: i64) -> NorthwindResult<NorthwindStream<Product>>;

    /// Streams products whose name is one of `names`.
    fn get_products_by_name(&self, names: &[String]) -> NorthwindResult<NorthwindStream<Product>>;

    /// Streams products belonging to any of `category_ids`.
    fn get_products_by_category(&self, category_ids: &[i32]) -> NorthwindResult<NorthwindStream<Product>>;

    /// Gets a product by ID, `None` if it does not exist.
    async fn try_get_product(&self, product_id: i32) -> NorthwindResult<Option<Product>>;

    /// Creates a product and returns its id.
    async fn create_product(&self, product: Product) -> NorthwindResult<i32>;

    /// Replaces the product with id `product_id`. Returns `false` if absent.
    async fn update_product(&self, product_id: i32, product: Product) -> NorthwindResult<bool>;

    /// Deletes a product. Returns `false` if absent.
    async fn delete_product(&self, product_id: i32) -> NorthwindResult<bool>;
}
