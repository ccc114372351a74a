//! Product category controller.

use super::{resolve_update_id, upload_picture, PictureUpload};
use crate::{
    extractors::{IdQuery, NamesQuery, PaginationQuery, ValidatedJson},
    responses::{bitmap, created, json_array, ok, ApiResult},
    state::AppState,
};
use axum::{
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    response::Response,
    routing::get,
    Json, Router,
};
use northwind_core::{ErrorResponse, NorthwindError, ProductCategory};
use tracing::debug;

/// Creates the product category router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_categories).post(create_category).put(update_category_by_query))
        .route("/ByName", get(list_categories_by_name))
        .route("/:id", get(get_category).put(update_category).delete(delete_category))
        .route(
            "/:id/picture",
            get(get_category_picture)
                .put(update_category_picture)
                .delete(delete_category_picture),
        )
}

/// List a window of categories.
#[utoipa::path(
    get,
    path = "/api/categories",
    tag = "categories",
    params(PaginationQuery),
    responses(
        (status = 200, description = "Categories ordered by id", body = [ProductCategory]),
        (status = 400, description = "Invalid offset or limit", body = ErrorResponse)
    )
)]
pub async fn list_categories(
    State(state): State<AppState>,
    Query(query): Query<PaginationQuery>,
) -> ApiResult<Response> {
    debug!("List categories request: {:?}", query);
    let page = query.pagination()?;
    let categories = state.category_service.get_categories(page.offset, page.limit)?;
    Ok(json_array(categories))
}

/// List categories by name.
#[utoipa::path(
    get,
    path = "/api/categories/ByName",
    tag = "categories",
    params(NamesQuery),
    responses(
        (status = 200, description = "Matching categories", body = [ProductCategory]),
        (status = 400, description = "No names given", body = ErrorResponse)
    )
)]
pub async fn list_categories_by_name(
    State(state): State<AppState>,
    axum_extra::extract::Query(query): axum_extra::extract::Query<NamesQuery>,
) -> ApiResult<Response> {
    debug!("List categories by name request: {:?}", query.names);
    let categories = state.category_service.get_categories_by_name(&query.names)?;
    Ok(json_array(categories))
}

/// Get a category by ID.
#[utoipa::path(
    get,
    path = "/api/categories/{id}",
    tag = "categories",
    params(("id" = i32, Path, description = "Category id")),
    responses(
        (status = 200, description = "The category", body = ProductCategory),
        (status = 404, description = "Category not found", body = ErrorResponse)
    )
)]
pub async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<ProductCategory>> {
    debug!("Get category request: {}", id);
    let category = state
        .category_service
        .try_get_category(id)
        .await?
        .ok_or_else(|| NorthwindError::not_found("ProductCategory", id))?;
    ok(category)
}

/// Create a category.
#[utoipa::path(
    post,
    path = "/api/categories",
    tag = "categories",
    request_body = ProductCategory,
    responses(
        (status = 201, description = "Category created", body = ProductCategory),
        (status = 422, description = "Validation failed", body = ErrorResponse)
    )
)]
pub async fn create_category(
    State(state): State<AppState>,
    ValidatedJson(category): ValidatedJson<ProductCategory>,
) -> ApiResult<Response> {
    debug!("Create category request: {}", category.name);
    let id = state.category_service.create_category(category.clone()).await?;
    created(format!("/api/categories/{id}"), ProductCategory { id, ..category })
}

/// Replace a category.
#[utoipa::path(
    put,
    path = "/api/categories/{id}",
    tag = "categories",
    params(("id" = i32, Path, description = "Category id")),
    request_body = ProductCategory,
    responses(
        (status = 200, description = "Category updated", body = ProductCategory),
        (status = 400, description = "Body id does not match path id", body = ErrorResponse),
        (status = 404, description = "Category not found", body = ErrorResponse)
    )
)]
pub async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(category): ValidatedJson<ProductCategory>,
) -> ApiResult<Json<ProductCategory>> {
    save_category(&state, Some(id), category).await
}

/// Replace the category named by `?id=` or by the body.
#[utoipa::path(
    put,
    path = "/api/categories",
    tag = "categories",
    params(IdQuery),
    request_body = ProductCategory,
    responses(
        (status = 200, description = "Category updated", body = ProductCategory),
        (status = 400, description = "Missing or conflicting id", body = ErrorResponse),
        (status = 404, description = "Category not found", body = ErrorResponse)
    )
)]
pub async fn update_category_by_query(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
    ValidatedJson(category): ValidatedJson<ProductCategory>,
) -> ApiResult<Json<ProductCategory>> {
    save_category(&state, query.id, category).await
}

async fn save_category(
    state: &AppState,
    route_id: Option<i32>,
    category: ProductCategory,
) -> ApiResult<Json<ProductCategory>> {
    let id = resolve_update_id(route_id, category.id)?;
    debug!("Update category request: {}", id);

    if !state.category_service.update_category(id, category.clone()).await? {
        return Err(NorthwindError::not_found("ProductCategory", id).into());
    }
    ok(ProductCategory { id, ..category })
}

/// Delete a category.
#[utoipa::path(
    delete,
    path = "/api/categories/{id}",
    tag = "categories",
    params(("id" = i32, Path, description = "Category id")),
    responses(
        (status = 200, description = "Category deleted"),
        (status = 404, description = "Category not found", body = ErrorResponse),
        (status = 409, description = "Category still referenced by products", body = ErrorResponse)
    )
)]
pub async fn delete_category(State(state): State<AppState>, Path(id): Path<i32>) -> ApiResult<StatusCode> {
    debug!("Delete category request: {}", id);
    if !state.category_service.delete_category(id).await? {
        return Err(NorthwindError::not_found("ProductCategory", id).into());
    }
    Ok(StatusCode::OK)
}

/// Get a category's picture.
#[utoipa::path(
    get,
    path = "/api/categories/{id}/picture",
    tag = "categories",
    params(("id" = i32, Path, description = "Category id")),
    responses(
        (status = 200, description = "Picture bytes as image/bmp"),
        (status = 404, description = "Category or picture not found", body = ErrorResponse)
    )
)]
pub async fn get_category_picture(State(state): State<AppState>, Path(id): Path<i32>) -> ApiResult<Response> {
    debug!("Get category picture request: {}", id);
    let picture = state
        .category_pictures
        .try_get_picture(id)
        .await?
        .ok_or_else(|| NorthwindError::not_found("ProductCategory picture", id))?;
    Ok(bitmap(picture))
}

/// Upload a category's picture.
#[utoipa::path(
    put,
    path = "/api/categories/{id}/picture",
    tag = "categories",
    params(("id" = i32, Path, description = "Category id")),
    request_body(content = PictureUpload, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Picture stored"),
        (status = 400, description = "No file uploaded", body = ErrorResponse),
        (status = 404, description = "Category not found", body = ErrorResponse)
    )
)]
pub async fn update_category_picture(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    multipart: Multipart,
) -> ApiResult<StatusCode> {
    debug!("Update category picture request: {}", id);
    if !upload_picture(state.category_pictures.as_ref(), id, multipart).await? {
        return Err(NorthwindError::not_found("ProductCategory", id).into());
    }
    Ok(StatusCode::OK)
}

/// Delete a category's picture.
#[utoipa::path(
    delete,
    path = "/api/categories/{id}/picture",
    tag = "categories",
    params(("id" = i32, Path, description = "Category id")),
    responses(
        (status = 200, description = "Picture removed"),
        (status = 404, description = "Category not found", body = ErrorResponse)
    )
)]
pub async fn delete_category_picture(State(state): State<AppState>, Path(id): Path<i32>) -> ApiResult<StatusCode> {
    debug!("Delete category picture request: {}", id);
    if !state.category_pictures.delete_picture(id).await? {
        return Err(NorthwindError::not_found("ProductCategory", id).into());
    }
    Ok(StatusCode::OK)
}
