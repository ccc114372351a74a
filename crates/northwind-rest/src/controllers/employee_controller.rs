//! Employee controller.

use super::{resolve_update_id, upload_picture, PictureUpload};
use crate::{
    extractors::{IdQuery, PaginationQuery, ValidatedJson},
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
use northwind_core::{Employee, ErrorResponse, NorthwindError};
use tracing::debug;

/// Creates the employee router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_employees).post(create_employee).put(update_employee_by_query))
        .route("/:id", get(get_employee).put(update_employee).delete(delete_employee))
        .route(
            "/:id/picture",
            get(get_employee_picture)
                .put(update_employee_picture)
                .delete(delete_employee_picture),
        )
}

/// List a window of employees.
#[utoipa::path(
    get,
    path = "/api/employees",
    tag = "employees",
    params(PaginationQuery),
    responses(
        (status = 200, description = "Employees ordered by id", body = [Employee]),
        (status = 400, description = "Invalid offset or limit", body = ErrorResponse)
    )
)]
pub async fn list_employees(
    State(state): State<AppState>,
    Query(query): Query<PaginationQuery>,
) -> ApiResult<Response> {
    debug!("List employees request: {:?}", query);
    let page = query.pagination()?;
    let employees = state.employee_service.get_employees(page.offset, page.limit)?;
    Ok(json_array(employees))
}

/// Get an employee by ID.
#[utoipa::path(
    get,
    path = "/api/employees/{id}",
    tag = "employees",
    params(("id" = i32, Path, description = "Employee id")),
    responses(
        (status = 200, description = "The employee", body = Employee),
        (status = 404, description = "Employee not found", body = ErrorResponse)
    )
)]
pub async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<Employee>> {
    debug!("Get employee request: {}", id);
    let employee = state
        .employee_service
        .try_get_employee(id)
        .await?
        .ok_or_else(|| NorthwindError::not_found("Employee", id))?;
    ok(employee)
}

/// Create an employee.
#[utoipa::path(
    post,
    path = "/api/employees",
    tag = "employees",
    request_body = Employee,
    responses(
        (status = 201, description = "Employee created", body = Employee),
        (status = 422, description = "Validation failed", body = ErrorResponse)
    )
)]
pub async fn create_employee(
    State(state): State<AppState>,
    ValidatedJson(employee): ValidatedJson<Employee>,
) -> ApiResult<Response> {
    debug!("Create employee request: {} {}", employee.first_name, employee.last_name);
    let id = state.employee_service.create_employee(employee.clone()).await?;
    created(format!("/api/employees/{id}"), Employee { id, ..employee })
}

/// Replace an employee.
#[utoipa::path(
    put,
    path = "/api/employees/{id}",
    tag = "employees",
    params(("id" = i32, Path, description = "Employee id")),
    request_body = Employee,
    responses(
        (status = 200, description = "Employee updated", body = Employee),
        (status = 400, description = "Body id does not match path id", body = ErrorResponse),
        (status = 404, description = "Employee not found", body = ErrorResponse)
    )
)]
pub async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(employee): ValidatedJson<Employee>,
) -> ApiResult<Json<Employee>> {
    save_employee(&state, Some(id), employee).await
}

/// Replace the employee named by `?id=` or by the body.
#[utoipa::path(
    put,
    path = "/api/employees",
    tag = "employees",
    params(IdQuery),
    request_body = Employee,
    responses(
        (status = 200, description = "Employee updated", body = Employee),
        (status = 400, description = "Missing or conflicting id", body = ErrorResponse),
        (status = 404, description = "Employee not found", body = ErrorResponse)
    )
)]
pub async fn update_employee_by_query(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
    ValidatedJson(employee): ValidatedJson<Employee>,
) -> ApiResult<Json<Employee>> {
    save_employee(&state, query.id, employee).await
}

async fn save_employee(
    state: &AppState,
    route_id: Option<i32>,
    employee: Employee,
) -> ApiResult<Json<Employee>> {
    let id = resolve_update_id(route_id, employee.id)?;
    debug!("Update employee request: {}", id);

    if !state.employee_service.update_employee(id, employee.clone()).await? {
        return Err(NorthwindError::not_found("Employee", id).into());
    }
    ok(Employee { id, ..employee })
}

/// Delete an employee.
#[utoipa::path(
    delete,
    path = "/api/employees/{id}",
    tag = "employees",
    params(("id" = i32, Path, description = "Employee id")),
    responses(
        (status = 200, description = "Employee deleted"),
        (status = 404, description = "Employee not found", body = ErrorResponse),
        (status = 409, description = "Employee still referenced as a manager", body = ErrorResponse)
    )
)]
pub async fn delete_employee(State(state): State<AppState>, Path(id): Path<i32>) -> ApiResult<StatusCode> {
    debug!("Delete employee request: {}", id);
    if !state.employee_service.delete_employee(id).await? {
        return Err(NorthwindError::not_found("Employee", id).into());
    }
    Ok(StatusCode::OK)
}

/// Get an employee's photo.
#[utoipa::path(
    get,
    path = "/api/employees/{id}/picture",
    tag = "employees",
    params(("id" = i32, Path, description = "Employee id")),
    responses(
        (status = 200, description = "Photo bytes as image/bmp"),
        (status = 404, description = "Employee or photo not found", body = ErrorResponse)
    )
)]
pub async fn get_employee_picture(State(state): State<AppState>, Path(id): Path<i32>) -> ApiResult<Response> {
    debug!("Get employee photo request: {}", id);
    let picture = state
        .employee_pictures
        .try_get_picture(id)
        .await?
        .ok_or_else(|| NorthwindError::not_found("Employee photo", id))?;
    Ok(bitmap(picture))
}

/// Upload an employee's photo.
#[utoipa::path(
    put,
    path = "/api/employees/{id}/picture",
    tag = "employees",
    params(("id" = i32, Path, description = "Employee id")),
    request_body(content = PictureUpload, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Photo stored"),
        (status = 400, description = "No file uploaded", body = ErrorResponse),
        (status = 404, description = "Employee not found", body = ErrorResponse)
    )
)]
pub async fn update_employee_picture(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    multipart: Multipart,
) -> ApiResult<StatusCode> {
    debug!("Update employee photo request: {}", id);
    if !upload_picture(state.employee_pictures.as_ref(), id, multipart).await? {
        return Err(NorthwindError::not_found("Employee", id).into());
    }
    Ok(StatusCode::OK)
}

/// Delete an employee's photo.
#[utoipa::path(
    delete,
    path = "/api/employees/{id}/picture",
    tag = "employees",
    params(("id" = i32, Path, description = "Employee id")),
    responses(
        (status = 200, description = "Photo removed"),
        (status = 404, description = "Employee not found", body = ErrorResponse)
    )
)]
pub async fn delete_employee_picture(State(state): State<AppState>, Path(id): Path<i32>) -> ApiResult<StatusCode> {
    debug!("Delete employee photo request: {}", id);
    if !state.employee_pictures.delete_picture(id).await? {
        return Err(NorthwindError::not_found("Employee", id).into());
    }
    Ok(StatusCode::OK)
}
