//! Transfer objects: plain records mirroring database rows.
//!
//! Each record is decoded straight from a query whose columns are aliased
//! to the field names, and bound field-by-field on writes.

mod employee;
mod product;
mod product_category;

pub use employee::EmployeeTransferObject;
pub use product::ProductTransferObject;
pub use product_category::ProductCategoryTransferObject;
