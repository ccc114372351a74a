//! # Northwind Core
//!
//! Core types, traits, domain models and error definitions for the
//! Northwind API. Every other crate in the workspace builds on the
//! abstractions defined here.

pub mod domain;
pub mod encoding;
pub mod error;
pub mod pagination;
pub mod result;
pub mod traits;
pub mod validation;

pub use domain::*;
pub use error::*;
pub use pagination::*;
pub use result::*;
pub use traits::*;
pub use validation::*;
