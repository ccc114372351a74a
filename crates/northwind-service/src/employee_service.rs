//! Employee service trait definition.

use async_trait::async_trait;
use northwind_core::{Employee, NorthwindResult, NorthwindStream};

/// Employee service trait.
#[async_trait]
pub trait EmployeeService: Send + Sync {
    /// Streams a window of employees ordered by id.
    fn get_employees(&self, offset: i64, limit: i64) -> NorthwindResult<NorthwindStream<Employee>>;

    /// Gets an employee by ID, `None` if it does not exist.
    async fn try_get_employee(&self, employee_id: i32) -> NorthwindResult<Option<Employee>>;

    /// Creates an employee and returns its id.
    async fn create_employee(&self, employee: Employee) -> NorthwindResult<i32>;

    /// Replaces the employee with id `employee_id`. Returns `false` if absent.
    async fn update_employee(&self, employee_id: i32, employee: Employee) -> NorthwindResult<bool>;

    /// Deletes an employee. Returns `false` if absent.
    async fn delete_employee(&self, employee_id: i32) -> NorthwindResult<bool>;
}
