//! Product category service implementation.

use super::found;
use crate::mappers::ProductCategoryMapper;
use crate::product_category_service::ProductCategoryService;
use async_trait::async_trait;
use futures::{StreamExt, TryStreamExt};
use northwind_core::{BiMapper, Mapper, NorthwindResult, NorthwindStream, ProductCategory};
use northwind_repository::ProductCategoryDao;
use std::sync::Arc;
use tracing::{debug, info};

/// Product category service backed by a [`ProductCategoryDao`].
pub struct ProductCategoryServiceImpl {
    category_dao: Arc<dyn ProductCategoryDao>,
}

impl ProductCategoryServiceImpl {
    /// Creates a new product category service.
    pub fn new(category_dao: Arc<dyn ProductCategoryDao>) -> Self {
        Self { category_dao }
    }
}

#[async_trait]
impl ProductCategoryService for ProductCategoryServiceImpl {
    fn get_categories(&self, offset: i64, limit: i64) -> NorthwindResult<NorthwindStream<ProductCategory>> {
        debug!("Listing categories, offset: {}, limit: {}", offset, limit);
        Ok(self
            .category_dao
            .select(offset, limit)?
            .map_ok(ProductCategoryMapper::map)
            .boxed())
    }

    fn get_categories_by_name(&self, names: &[String]) -> NorthwindResult<NorthwindStream<ProductCategory>> {
        debug!("Listing categories by name: {:?}", names);
        Ok(self
            .category_dao
            .select_by_name(names)?
            .map_ok(ProductCategoryMapper::map)
            .boxed())
    }

    async fn try_get_category(&self, category_id: i32) -> NorthwindResult<Option<ProductCategory>> {
        debug!("Getting category: {}", category_id);
        let record = found(self.category_dao.find(category_id).await)?;
        Ok(record.map(ProductCategoryMapper::map))
    }

    async fn create_category(&self, category: ProductCategory) -> NorthwindResult<i32> {
        debug!("Creating category: {}", category.name);
        let id = self
            .category_dao
            .insert(&ProductCategoryMapper::map_back(category))
            .await?;
        info!("Category created: {}", id);
        Ok(id)
    }

    async fn update_category(&self, category_id: i32, mut category: ProductCategory) -> NorthwindResult<bool> {
        debug!("Updating category: {}", category_id);
        category.id = category_id;
        self.category_dao
            .update(&ProductCategoryMapper::map_back(category))
            .await
    }

    async fn delete_category(&self, category_id: i32) -> NorthwindResult<bool> {
        debug!("Deleting category: {}", category_id);
        self.category_dao.delete(category_id).await
    }
}
