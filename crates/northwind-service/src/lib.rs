//! # Northwind Service
//!
//! Service layer between the REST controllers and the DAOs. Services map
//! transfer objects to domain models and turn a DAO's "not found" into
//! `Option`/`bool` results.

pub mod employee_service;
pub mod r#impl;
pub mod mappers;
pub mod picture_service;
pub mod product_category_service;
pub mod product_service;

pub use employee_service::*;
pub use r#impl::*;
pub use picture_service::*;
pub use product_category_service::*;
pub use product_service::*;
