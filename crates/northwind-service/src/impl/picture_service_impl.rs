//! Picture service implementations for categories and employees.
//!
//! Both read the row, swap the image region of its blob and write the row
//! back. Concurrent writers to the same row follow last-write-wins.

use super::found;
use crate::picture_service::{image_bytes, with_reserved_header, PictureService};
use async_trait::async_trait;
use northwind_core::NorthwindResult;
use northwind_repository::{EmployeeDao, ProductCategoryDao};
use std::sync::Arc;
use tokio::io::{AsyncRead, AsyncReadExt};
use tracing::{debug, info};

async fn read_image(reader: &mut (dyn AsyncRead + Unpin + Send)) -> NorthwindResult<Vec<u8>> {
    let mut image = Vec::new();
    reader.read_to_end(&mut image).await?;
    Ok(image)
}

/// Category pictures, stored in `Categories.Picture`.
pub struct ProductCategoryPictureService {
    category_dao: Arc<dyn ProductCategoryDao>,
}

impl ProductCategoryPictureService {
    /// Creates a new category picture service.
    pub fn new(category_dao: Arc<dyn ProductCategoryDao>) -> Self {
        Self { category_dao }
    }
}

#[async_trait]
impl PictureService for ProductCategoryPictureService {
    async fn try_get_picture(&self, id: i32) -> NorthwindResult<Option<Vec<u8>>> {
        debug!("Getting picture of category: {}", id);
        let category = found(self.category_dao.find(id).await)?;
        Ok(category.and_then(|c| image_bytes(c.picture.as_deref())))
    }

    async fn update_picture(
        &self,
        id: i32,
        reader: &mut (dyn AsyncRead + Unpin + Send),
    ) -> NorthwindResult<bool> {
        debug!("Updating picture of category: {}", id);
        let Some(mut category) = found(self.category_dao.find(id).await)? else {
            return Ok(false);
        };

        let image = read_image(reader).await?;
        category.picture = Some(with_reserved_header(category.picture.as_deref(), &image));
        let updated = self.category_dao.update(&category).await?;
        if updated {
            info!("Category picture updated: {} ({} bytes)", id, image.len());
        }
        Ok(updated)
    }

    async fn delete_picture(&self, id: i32) -> NorthwindResult<bool> {
        debug!("Deleting picture of category: {}", id);
        let Some(mut category) = found(self.category_dao.find(id).await)? else {
            return Ok(false);
        };

        category.picture = None;
        self.category_dao.update(&category).await
    }
}

/// Employee photos, stored in `Employees.Photo`.
pub struct EmployeePictureService {
    employee_dao: Arc<dyn EmployeeDao>,
}

impl EmployeePictureService {
    /// Creates a new employee picture service.
    pub fn new(employee_dao: Arc<dyn EmployeeDao>) -> Self {
        Self { employee_dao }
    }
}

#[async_trait]
impl PictureService for EmployeePictureService {
    async fn try_get_picture(&self, id: i32) -> NorthwindResult<Option<Vec<u8>>> {
        debug!("Getting photo of employee: {}", id);
        let employee = found(self.employee_dao.find(id).await)?;
        Ok(employee.and_then(|e| image_bytes(e.photo.as_deref())))
    }

    async fn update_picture(
        &self,
        id: i32,
        reader: &mut (dyn AsyncRead + Unpin + Send),
    ) -> NorthwindResult<bool> {
        debug!("Updating photo of employee: {}", id);
        let Some(mut employee) = found(self.employee_dao.find(id).await)? else {
            return Ok(false);
        };

        let image = read_image(reader).await?;
        employee.photo = Some(with_reserved_header(employee.photo.as_deref(), &image));
        let updated = self.employee_dao.update(&employee).await?;
        if updated {
            info!("Employee photo updated: {} ({} bytes)", id, image.len());
        }
        Ok(updated)
    }

    async fn delete_picture(&self, id: i32) -> NorthwindResult<bool> {
        debug!("Deleting photo of employee: {}", id);
        let Some(mut employee) = found(self.employee_dao.find(id).await)? else {
            return Ok(false);
        };

        employee.photo = None;
        self.employee_dao.update(&employee).await
    }
}
