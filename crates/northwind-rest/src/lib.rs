//! # Northwind REST
//!
//! REST API layer using Axum for the Northwind API.
//! Provides HTTP endpoints for employees, products, product categories
//! and health checks.

pub mod controllers;
pub mod extractors;
pub mod middleware;
pub mod openapi;
pub mod responses;
pub mod router;
pub mod state;

pub use router::*;
pub use state::*;
