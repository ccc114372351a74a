//! Employee service implementation.

use super::found;
use crate::employee_service::EmployeeService;
use crate::mappers::EmployeeMapper;
use async_trait::async_trait;
use futures::{StreamExt, TryStreamExt};
use northwind_core::{BiMapper, Employee, Mapper, NorthwindResult, NorthwindStream};
use northwind_repository::EmployeeDao;
use std::sync::Arc;
use tracing::{debug, info};

/// Employee service backed by an [`EmployeeDao`].
pub struct EmployeeServiceImpl {
    employee_dao: Arc<dyn EmployeeDao>,
}

impl EmployeeServiceImpl {
    /// Creates a new employee service.
    pub fn new(employee_dao: Arc<dyn EmployeeDao>) -> Self {
        Self { employee_dao }
    }
}

#[async_trait]
impl EmployeeService for EmployeeServiceImpl {
    fn get_employees(&self, offset: i64, limit: i64) -> NorthwindResult<NorthwindStream<Employee>> {
        debug!("Listing employees, offset: {}, limit: {}", offset, limit);
        Ok(self
            .employee_dao
            .select(offset, limit)?
            .map_ok(EmployeeMapper::map)
            .boxed())
    }

    async fn try_get_employee(&self, employee_id: i32) -> NorthwindResult<Option<Employee>> {
        debug!("Getting employee: {}", employee_id);
        let record = found(self.employee_dao.find(employee_id).await)?;
        Ok(record.map(EmployeeMapper::map))
    }

    async fn create_employee(&self, employee: Employee) -> NorthwindResult<i32> {
        debug!("Creating employee: {} {}", employee.first_name, employee.last_name);
        let id = self.employee_dao.insert(&EmployeeMapper::map_back(employee)).await?;
        info!("Employee created: {}", id);
        Ok(id)
    }

    async fn update_employee(&self, employee_id: i32, mut employee: Employee) -> NorthwindResult<bool> {
        debug!("Updating employee: {}", employee_id);
        employee.id = employee_id;
        self.employee_dao.update(&EmployeeMapper::map_back(employee)).await
    }

    async fn delete_employee(&self, employee_id: i32) -> NorthwindResult<bool> {
        debug!("Deleting employee: {}", employee_id);
        self.employee_dao.delete(employee_id).await
    }
}
