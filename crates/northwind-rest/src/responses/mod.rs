//! API response types.

use axum::{
    body::{Body, Bytes},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use futures::{stream, StreamExt};
use northwind_core::{ErrorResponse, NorthwindError, NorthwindStream};
use serde::Serialize;
use tracing::{error, warn};

/// Application error type for Axum.
#[derive(Debug)]
pub struct AppError(pub NorthwindError);

impl From<NorthwindError> for AppError {
    fn from(err: NorthwindError) -> Self {
        Self(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        if status.is_server_error() {
            error!(error = %self.0, "Request failed");
        }

        (status, Json(ErrorResponse::from_error(&self.0))).into_response()
    }
}

/// Result type for Axum handlers.
pub type ApiResult<T> = Result<T, AppError>;

/// Helper to create a success response.
pub fn ok<T: Serialize>(data: T) -> ApiResult<Json<T>> {
    Ok(Json(data))
}

/// Helper to create a created (201) response with a `Location` header.
pub fn created<T: Serialize>(location: String, data: T) -> ApiResult<Response> {
    let location = HeaderValue::try_from(location)
        .map_err(|e| NorthwindError::internal(format!("Invalid location header: {e}")))?;
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(data)).into_response())
}

/// Streams `items` to the client as a JSON array.
///
/// Rows are serialized as they arrive. A failure after the first chunk
/// has been sent can only abort the body, so it is logged and ends the
/// connection.
pub fn json_array<T>(items: NorthwindStream<T>) -> Response
where
    T: Serialize + Send + 'static,
{
    let elements = items.enumerate().map(|(index, item)| {
        let item = item.map_err(|e| {
            warn!(error = %e, "Aborting streamed response");
            e
        })?;
        let mut chunk = if index == 0 { Vec::new() } else { vec![b','] };
        serde_json::to_writer(&mut chunk, &item)?;
        Ok::<_, NorthwindError>(Bytes::from(chunk))
    });

    let open = stream::once(async { Ok::<_, NorthwindError>(Bytes::from_static(b"[")) });
    let close = stream::once(async { Ok::<_, NorthwindError>(Bytes::from_static(b"]")) });
    let body = open.chain(elements).chain(close);

    (
        [(header::CONTENT_TYPE, HeaderValue::from_static("application/json"))],
        Body::from_stream(body),
    )
        .into_response()
}

/// Serves raw picture bytes.
pub fn bitmap(bytes: Vec<u8>) -> Response {
    (
        [(header::CONTENT_TYPE, HeaderValue::from_static("image/bmp"))],
        bytes,
    )
        .into_response()
}
