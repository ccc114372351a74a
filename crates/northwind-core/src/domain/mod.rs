//! Domain models exposed by the Northwind API.
//!
//! These are the shapes clients read and write; persistence records live
//! in the repository crate and are mapped by the service layer.

pub mod employee;
pub mod product;
pub mod product_category;

pub use employee::*;
pub use product::*;
pub use product_category::*;
