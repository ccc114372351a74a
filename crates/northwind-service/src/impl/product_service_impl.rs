//! Product service implementation.

use super::found;
use crate::mappers::ProductMapper;
use crate::product_service::ProductService;
use async_trait::async_trait;
use futures::{StreamExt, TryStreamExt};
use northwind_core::{BiMapper, Mapper, NorthwindResult, NorthwindStream, Product};
use northwind_repository::ProductDao;
use std::sync::Arc;
use tracing::{debug, info};

/// Product service backed by a [`ProductDao`].
pub struct ProductServiceImpl {
    product_dao: Arc<dyn ProductDao>,
}

impl ProductServiceImpl {
    /// Creates a new product service.
    pub fn new(product_dao: Arc<dyn ProductDao>) -> Self {
        Self { product_dao }
    }
}

#[async_trait]
impl ProductService for ProductServiceImpl {
    fn get_products(&self, offset: i64, limit: i64) -> NorthwindResult<NorthwindStream<Product>> {
        debug!("Listing products, offset: {}, limit: {}", offset, limit);
        Ok(self.product_dao.select(offset, limit)?.map_ok(ProductMapper::map).boxed())
    }

    fn get_products_by_name(&self, names: &[String]) -> NorthwindResult<NorthwindStream<Product>> {
        debug!("Listing products by name: {:?}", names);
        Ok(self.product_dao.select_by_name(names)?.map_ok(ProductMapper::map).boxed())
    }

    fn get_products_by_category(&self, category_ids: &[i32]) -> NorthwindResult<NorthwindStream<Product>> {
        debug!("Listing products by category: {:?}", category_ids);
        Ok(self
            .product_dao
            .select_by_category(category_ids)?
            .map_ok(ProductMapper::map)
            .boxed())
    }

    async fn try_get_product(&self, product_id: i32) -> NorthwindResult<Option<Product>> {
        debug!("Getting product: {}", product_id);
        let record = found(self.product_dao.find(product_id).await)?;
        Ok(record.map(ProductMapper::map))
    }

    async fn create_product(&self, product: Product) -> NorthwindResult<i32> {
        debug!("Creating product: {}", product.name);
        let id = self.product_dao.insert(&ProductMapper::map_back(product)).await?;
        info!("Product created: {}", id);
        Ok(id)
    }

    async fn update_product(&self, product_id: i32, mut product: Product) -> NorthwindResult<bool> {
        debug!("Updating product: {}", product_id);
        product.id = product_id;
        self.product_dao.update(&ProductMapper::map_back(product)).await
    }

    async fn delete_product(&self, product_id: i32) -> NorthwindResult<bool> {
        debug!("Deleting product: {}", product_id);
        self.product_dao.delete(product_id).await
    }
}
