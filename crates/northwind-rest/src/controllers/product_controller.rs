//! Product controller.

use super::resolve_update_id;
use crate::{
    extractors::{CategoriesQuery, IdQuery, NamesQuery, PaginationQuery, ValidatedJson},
    responses::{created, json_array, ok, ApiResult},
    state::AppState,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Response,
    routing::get,
    Json, Router,
};
use northwind_core::{ErrorResponse, NorthwindError, Product};
use tracing::debug;

/// Creates the product router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_products).post(create_product).put(update_product_by_query))
        .route("/ByNames", get(list_products_by_name))
        .route("/ByCategory", get(list_products_by_category))
        .route("/:id", get(get_product).put(update_product).delete(delete_product))
}

/// List a window of products.
#[utoipa::path(
    get,
    path = "/api/products",
    tag = "products",
    params(PaginationQuery),
    responses(
        (status = 200, description = "Products ordered by id", body = [Product]),
        (status = 400, description = "Invalid offset or limit", body = ErrorResponse)
    )
)]
pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<PaginationQuery>,
) -> ApiResult<Response> {
    debug!("List products request: {:?}", query);
    let page = query.pagination()?;
    let products = state.product_service.get_products(page.offset, page.limit)?;
    Ok(json_array(products))
}

/// List products by name.
#[utoipa::path(
    get,
    path = "/api/products/ByNames",
    tag = "products",
    params(NamesQuery),
    responses(
        (status = 200, description = "Matching products", body = [Product]),
        (status = 400, description = "No names given", body = ErrorResponse)
    )
)]
pub async fn list_products_by_name(
    State(state): State<AppState>,
    axum_extra::extract::Query(query): axum_extra::extract::Query<NamesQuery>,
) -> ApiResult<Response> {
    debug!("List products by name request: {:?}", query.names);
    let products = state.product_service.get_products_by_name(&query.names)?;
    Ok(json_array(products))
}

/// List products in any of the given categories.
#[utoipa::path(
    get,
    path = "/api/products/ByCategory",
    tag = "products",
    params(CategoriesQuery),
    responses(
        (status = 200, description = "Matching products", body = [Product]),
        (status = 400, description = "No categories given", body = ErrorResponse)
    )
)]
pub async fn list_products_by_category(
    State(state): State<AppState>,
    axum_extra::extract::Query(query): axum_extra::extract::Query<CategoriesQuery>,
) -> ApiResult<Response> {
    debug!("List products by category request: {:?}", query.categories);
    let products = state.product_service.get_products_by_category(&query.categories)?;
    Ok(json_array(products))
}

/// Get a product by ID.
#[utoipa::path(
    get,
    path = "/api/products/{id}",
    tag = "products",
    params(("id" = i32, Path, description = "Product id")),
    responses(
        (status = 200, description = "The product", body = Product),
        (status = 404, description = "Product not found", body = ErrorResponse)
    )
)]
pub async fn get_product(State(state): State<AppState>, Path(id): Path<i32>) -> ApiResult<Json<Product>> {
    debug!("Get product request: {}", id);
    let product = state
        .product_service
        .try_get_product(id)
        .await?
        .ok_or_else(|| NorthwindError::not_found("Product", id))?;
    ok(product)
}

/// Create a product.
#[utoipa::path(
    post,
    path = "/api/products",
    tag = "products",
    request_body = Product,
    responses(
        (status = 201, description = "Product created", body = Product),
        (status = 422, description = "Validation failed", body = ErrorResponse)
    )
)]
pub async fn create_product(
    State(state): State<AppState>,
    ValidatedJson(product): ValidatedJson<Product>,
) -> ApiResult<Response> {
    debug!("Create product request: {}", product.name);
    let id = state.product_service.create_product(product.clone()).await?;
    created(format!("/api/products/{id}"), Product { id, ..product })
}

/// Replace a product.
#[utoipa::path(
    put,
    path = "/api/products/{id}",
    tag = "products",
    params(("id" = i32, Path, description = "Product id")),
    request_body = Product,
    responses(
        (status = 200, description = "Product updated", body = Product),
        (status = 400, description = "Body id does not match path id", body = ErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse)
    )
)]
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(product): ValidatedJson<Product>,
) -> ApiResult<Json<Product>> {
    save_product(&state, Some(id), product).await
}

/// Replace the product named by `?id=` or by the body.
#[utoipa::path(
    put,
    path = "/api/products",
    tag = "products",
    params(IdQuery),
    request_body = Product,
    responses(
        (status = 200, description = "Product updated", body = Product),
        (status = 400, description = "Missing or conflicting id", body = ErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse)
    )
)]
pub async fn update_product_by_query(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
    ValidatedJson(product): ValidatedJson<Product>,
) -> ApiResult<Json<Product>> {
    save_product(&state, query.id, product).await
}

async fn save_product(state: &AppState, route_id: Option<i32>, product: Product) -> ApiResult<Json<Product>> {
    let id = resolve_update_id(route_id, product.id)?;
    debug!("Update product request: {}", id);

    if !state.product_service.update_product(id, product.clone()).await? {
        return Err(NorthwindError::not_found("Product", id).into());
    }
    ok(Product { id, ..product })
}

/// Delete a product.
#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    tag = "products",
    params(("id" = i32, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product deleted"),
        (status = 404, description = "Product not found", body = ErrorResponse)
    )
)]
pub async fn delete_product(State(state): State<AppState>, Path(id): Path<i32>) -> ApiResult<StatusCode> {
    debug!("Delete product request: {}", id);
    if !state.product_service.delete_product(id).await? {
        return Err(NorthwindError::not_found("Product", id).into());
    }
    Ok(StatusCode::OK)
}
