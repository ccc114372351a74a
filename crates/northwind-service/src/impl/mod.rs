//! Service implementations.
//!
//! Trait definitions live in the parent module (e.g. `product_service.rs`).

pub mod employee_service_impl;
pub mod picture_service_impl;
pub mod product_category_service_impl;
pub mod product_service_impl;

pub use employee_service_impl::EmployeeServiceImpl;
pub use picture_service_impl::{EmployeePictureService, ProductCategoryPictureService};
pub use product_category_service_impl::ProductCategoryServiceImpl;
pub use product_service_impl::ProductServiceImpl;

use northwind_core::NorthwindResult;

/// Turns a DAO "not found" into `None`.
pub(crate) fn found<T>(result: NorthwindResult<T>) -> NorthwindResult<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.is_not_found() => Ok(None),
        Err(e) => Err(e),
    }
}
