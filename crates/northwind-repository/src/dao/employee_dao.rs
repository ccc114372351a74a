//! EmployeeDao trait.

use crate::transfer::EmployeeTransferObject;
use async_trait::async_trait;
use northwind_core::{NorthwindResult, NorthwindStream};

/// Data access for the `Employees` table.
#[async_trait]
pub trait EmployeeDao: Send + Sync {
    /// Finds an employee by id.
    async fn find(&self, employee_id: i32) -> NorthwindResult<EmployeeTransferObject>;

    /// Streams a window of employees ordered by id.
    fn select(&self, offset: i64, limit: i64) -> NorthwindResult<NorthwindStream<EmployeeTransferObject>>;

    /// Inserts an employee and returns the generated id.
    async fn insert(&self, employee: &EmployeeTransferObject) -> NorthwindResult<i32>;

    /// Replaces every column of the employee identified by `employee.id`.
    async fn update(&self, employee: &EmployeeTransferObject) -> NorthwindResult<bool>;

    /// Deletes an employee. Returns `true` if a row was removed.
    async fn delete(&self, employee_id: i32) -> NorthwindResult<bool>;
}
