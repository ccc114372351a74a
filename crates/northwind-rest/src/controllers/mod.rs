//! REST API controllers.

pub mod category_controller;
pub mod employee_controller;
pub mod health_controller;
pub mod product_controller;

pub use health_controller::*;

use crate::responses::AppError;
use axum::extract::Multipart;
use northwind_core::NorthwindError;
use northwind_service::PictureService;
use serde::Serialize;
use utoipa::ToSchema;

/// Multipart form accepted by the picture upload endpoints.
#[derive(Debug, Serialize, ToSchema)]
pub struct PictureUpload {
    /// Image file; the first file field of the form is used.
    #[schema(value_type = String, format = Binary)]
    pub file: Vec<u8>,
}

/// Picks the id of the row to update from the route (path or `?id=`) and
/// the body. A body id of 0 means "not given".
pub(crate) fn resolve_update_id(route_id: Option<i32>, body_id: i32) -> Result<i32, AppError> {
    match (route_id, body_id) {
        (Some(id), 0) => Ok(id),
        (Some(id), body_id) if id == body_id => Ok(id),
        (Some(id), body_id) => Err(NorthwindError::invalid_argument(format!(
            "id {id} does not match body id {body_id}"
        ))
        .into()),
        (None, 0) => Err(NorthwindError::invalid_argument("id is required").into()),
        (None, body_id) => Ok(body_id),
    }
}

/// Stores the first file field of `multipart` through `pictures`.
///
/// Returns `false` if the row does not exist.
pub(crate) async fn upload_picture(
    pictures: &dyn PictureService,
    id: i32,
    mut multipart: Multipart,
) -> Result<bool, AppError> {
    while let Some(field) = multipart.next_field().await.map_err(invalid_upload)? {
        if field.file_name().is_none() {
            continue;
        }
        let bytes = field.bytes().await.map_err(invalid_upload)?;
        return Ok(pictures.update_picture(id, &mut bytes.as_ref()).await?);
    }

    Err(NorthwindError::invalid_argument("no file was uploaded").into())
}

fn invalid_upload(err: axum::extract::multipart::MultipartError) -> AppError {
    NorthwindError::invalid_argument(format!("Invalid multipart body: {}", err.body_text())).into()
}
