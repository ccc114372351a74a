//! Application state for Axum handlers.

use northwind_core::HealthCheck;
use northwind_repository::DataAccessFactory;
use northwind_service::{
    EmployeePictureService, EmployeeService, EmployeeServiceImpl, PictureService,
    ProductCategoryPictureService, ProductCategoryService, ProductCategoryServiceImpl,
    ProductService, ProductServiceImpl,
};
use std::sync::Arc;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub employee_service: Arc<dyn EmployeeService>,
    pub employee_pictures: Arc<dyn PictureService>,
    pub product_service: Arc<dyn ProductService>,
    pub category_service: Arc<dyn ProductCategoryService>,
    pub category_pictures: Arc<dyn PictureService>,
    /// Probed by the readiness endpoint.
    pub database: Arc<dyn HealthCheck>,
}

impl AppState {
    /// Builds the services over the DAOs handed out by `factory`.
    pub fn from_factory(factory: &dyn DataAccessFactory, database: Arc<dyn HealthCheck>) -> Self {
        let employee_dao = factory.employee_dao();
        let category_dao = factory.product_category_dao();

        Self {
            employee_service: Arc::new(EmployeeServiceImpl::new(Arc::clone(&employee_dao))),
            employee_pictures: Arc::new(EmployeePictureService::new(employee_dao)),
            product_service: Arc::new(ProductServiceImpl::new(factory.product_dao())),
            category_service: Arc::new(ProductCategoryServiceImpl::new(Arc::clone(&category_dao))),
            category_pictures: Arc::new(ProductCategoryPictureService::new(category_dao)),
            database,
        }
    }
}
