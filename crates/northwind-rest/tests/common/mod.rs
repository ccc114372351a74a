//! Shared helpers for router tests.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Request, Response},
    Router,
};
use http_body_util::BodyExt;
use northwind_config::{DatabaseConfig, ServerConfig};
use northwind_repository::{DatabasePool, SqliteDataAccessFactory};
use northwind_rest::{create_router, AppState};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

pub const BOUNDARY: &str = "northwind-test-boundary";

/// A router over a migrated in-memory database.
pub struct TestApp {
    pub router: Router,
}

impl TestApp {
    pub async fn new() -> Self {
        let config = DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            ..DatabaseConfig::default()
        };
        let pool = Arc::new(DatabasePool::new(&config).await.expect("in-memory pool"));
        pool.run_migrations().await.expect("migrations");

        let factory = SqliteDataAccessFactory::new(Arc::clone(&pool));
        let state = AppState::from_factory(&factory, pool);
        Self {
            router: create_router(state, &ServerConfig::default()),
        }
    }

    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.router.clone().oneshot(request).await.expect("infallible router")
    }

    pub async fn get(&self, uri: &str) -> Response<Body> {
        self.send(Request::get(uri).body(Body::empty()).unwrap()).await
    }

    pub async fn delete(&self, uri: &str) -> Response<Body> {
        self.send(Request::delete(uri).body(Body::empty()).unwrap()).await
    }

    pub async fn post_json(&self, uri: &str, body: &Value) -> Response<Body> {
        self.send(json_request("POST", uri, body)).await
    }

    pub async fn put_json(&self, uri: &str, body: &Value) -> Response<Body> {
        self.send(json_request("PUT", uri, body)).await
    }

    /// Uploads `bytes` as the file field of a multipart form.
    pub async fn put_picture(&self, uri: &str, bytes: &[u8]) -> Response<Body> {
        let mut body = format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"picture.bmp\"\r\n\
             Content-Type: image/bmp\r\n\r\n"
        )
        .into_bytes();
        body.extend_from_slice(bytes);
        body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
        self.send(multipart_request(uri, body)).await
    }

    /// Sends a multipart form holding only a text field.
    pub async fn put_form_without_file(&self, uri: &str) -> Response<Body> {
        let body = format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"note\"\r\n\r\nhello\r\n--{BOUNDARY}--\r\n"
        )
        .into_bytes();
        self.send(multipart_request(uri, body)).await
    }

    /// Creates a category and returns its id.
    pub async fn create_category(&self, name: &str) -> i64 {
        let response = self
            .post_json("/api/categories", &serde_json::json!({ "name": name }))
            .await;
        body_json(response).await["id"].as_i64().expect("category id")
    }
}

fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn multipart_request(uri: &str, body: Vec<u8>) -> Request<Body> {
    Request::put(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response.into_body().collect().await.expect("body").to_bytes().to_vec()
}

pub async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_slice(&body_bytes(response).await).expect("json body")
}
