//! OpenAPI documentation configuration.

use crate::controllers::{HealthResponse, PictureUpload};
use northwind_core::{Employee, ErrorResponse, FieldError, Product, ProductCategory};
use utoipa::OpenApi;

/// OpenAPI documentation for the Northwind API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Northwind API",
        version = "1.0.0",
        description = "CRUD API for Northwind employees, products and product categories",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    paths(
        // Product endpoints
        crate::controllers::product_controller::list_products,
        crate::controllers::product_controller::list_products_by_name,
        crate::controllers::product_controller::list_products_by_category,
        crate::controllers::product_controller::get_product,
        crate::controllers::product_controller::create_product,
        crate::controllers::product_controller::update_product,
        crate::controllers::product_controller::update_product_by_query,
        crate::controllers::product_controller::delete_product,
        // Category endpoints
        crate::controllers::category_controller::list_categories,
        crate::controllers::category_controller::list_categories_by_name,
        crate::controllers::category_controller::get_category,
        crate::controllers::category_controller::create_category,
        crate::controllers::category_controller::update_category,
        crate::controllers::category_controller::update_category_by_query,
        crate::controllers::category_controller::delete_category,
        crate::controllers::category_controller::get_category_picture,
        crate::controllers::category_controller::update_category_picture,
        crate::controllers::category_controller::delete_category_picture,
        // Employee endpoints
        crate::controllers::employee_controller::list_employees,
        crate::controllers::employee_controller::get_employee,
        crate::controllers::employee_controller::create_employee,
        crate::controllers::employee_controller::update_employee,
        crate::controllers::employee_controller::update_employee_by_query,
        crate::controllers::employee_controller::delete_employee,
        crate::controllers::employee_controller::get_employee_picture,
        crate::controllers::employee_controller::update_employee_picture,
        crate::controllers::employee_controller::delete_employee_picture,
        // Health endpoints
        crate::controllers::health_controller::health_check,
        crate::controllers::health_controller::readiness_check,
        crate::controllers::health_controller::liveness_check,
    ),
    components(
        schemas(
            Product,
            ProductCategory,
            Employee,
            PictureUpload,
            ErrorResponse,
            FieldError,
            HealthResponse,
        )
    ),
    tags(
        (name = "products", description = "Product endpoints"),
        (name = "categories", description = "Product category endpoints"),
        (name = "employees", description = "Employee endpoints"),
        (name = "health", description = "Health check endpoints")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_entity_paths() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/products",
            "/api/products/{id}",
            "/api/products/ByNames",
            "/api/categories/{id}/picture",
            "/api/employees/{id}",
            "/ready",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
