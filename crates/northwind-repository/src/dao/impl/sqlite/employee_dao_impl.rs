//! SQLite implementation of [`EmployeeDao`].

use super::{stream_window, to_id};
use crate::dao::EmployeeDao;
use crate::transfer::EmployeeTransferObject;
use crate::DatabasePool;
use async_trait::async_trait;
use northwind_core::{ensure_positive_id, NorthwindError, NorthwindResult, NorthwindStream, Pagination};
use std::sync::Arc;
use tracing::{debug, info};

macro_rules! employee_columns {
    () => {
        "EmployeeID AS id, LastName AS last_name, FirstName AS first_name, Title AS title, \
         TitleOfCourtesy AS title_of_courtesy, BirthDate AS birth_date, HireDate AS hire_date, \
         Address AS address, City AS city, Region AS region, PostalCode AS postal_code, \
         Country AS country, HomePhone AS home_phone, Extension AS extension, Photo AS photo, \
         Notes AS notes, ReportsTo AS reports_to, PhotoPath AS photo_path"
    };
}

const FIND_EMPLOYEE: &str = concat!("SELECT ", employee_columns!(), " FROM Employees WHERE EmployeeID = ?");
const SELECT_EMPLOYEE_WINDOW: &str = concat!(
    "SELECT ",
    employee_columns!(),
    " FROM Employees ORDER BY EmployeeID LIMIT ? OFFSET ?"
);

/// SQLite-backed employee DAO.
#[derive(Clone)]
pub struct SqliteEmployeeDao {
    pool: Arc<DatabasePool>,
}

impl SqliteEmployeeDao {
    /// Creates a new SQLite employee DAO.
    #[must_use]
    pub fn new(pool: Arc<DatabasePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmployeeDao for SqliteEmployeeDao {
    async fn find(&self, employee_id: i32) -> NorthwindResult<EmployeeTransferObject> {
        ensure_positive_id(employee_id)?;
        debug!("Finding employee by id: {}", employee_id);

        sqlx::query_as::<_, EmployeeTransferObject>(FIND_EMPLOYEE)
            .bind(employee_id)
            .fetch_optional(self.pool.inner())
            .await?
            .ok_or_else(|| NorthwindError::not_found("Employee", employee_id))
    }

    fn select(&self, offset: i64, limit: i64) -> NorthwindResult<NorthwindStream<EmployeeTransferObject>> {
        let page = Pagination::new(offset, limit)?;
        debug!("Selecting employees: offset={}, limit={}", page.offset, page.limit);

        Ok(stream_window(
            self.pool.inner().clone(),
            SELECT_EMPLOYEE_WINDOW,
            page.offset,
            page.limit,
        ))
    }

    async fn insert(&self, employee: &EmployeeTransferObject) -> NorthwindResult<i32> {
        debug!("Inserting employee: {} {}", employee.first_name, employee.last_name);

        let result = sqlx::query(
            r#"
            INSERT INTO Employees (LastName, FirstName, Title, TitleOfCourtesy, BirthDate, HireDate,
                                   Address, City, Region, PostalCode, Country, HomePhone, Extension,
                                   Photo, Notes, ReportsTo, PhotoPath)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&employee.last_name)
        .bind(&employee.first_name)
        .bind(&employee.title)
        .bind(&employee.title_of_courtesy)
        .bind(employee.birth_date)
        .bind(employee.hire_date)
        .bind(&employee.address)
        .bind(&employee.city)
        .bind(&employee.region)
        .bind(&employee.postal_code)
        .bind(&employee.country)
        .bind(&employee.home_phone)
        .bind(&employee.extension)
        .bind(&employee.photo)
        .bind(&employee.notes)
        .bind(employee.reports_to)
        .bind(&employee.photo_path)
        .execute(self.pool.inner())
        .await?;

        let id = to_id(result.last_insert_rowid())?;
        info!("Employee created: {} {} ({})", employee.first_name, employee.last_name, id);
        Ok(id)
    }

    async fn update(&self, employee: &EmployeeTransferObject) -> NorthwindResult<bool> {
        ensure_positive_id(employee.id)?;
        debug!("Updating employee: {}", employee.id);

        let result = sqlx::query(
            r#"
            UPDATE Employees
            SET LastName = ?, FirstName = ?, Title = ?, TitleOfCourtesy = ?, BirthDate = ?, HireDate = ?,
                Address = ?, City = ?, Region = ?, PostalCode = ?, Country = ?, HomePhone = ?,
                Extension = ?, Photo = ?, Notes = ?, ReportsTo = ?, PhotoPath = ?
            WHERE EmployeeID = ?
            "#,
        )
        .bind(&employee.last_name)
        .bind(&employee.first_name)
        .bind(&employee.title)
        .bind(&employee.title_of_courtesy)
        .bind(employee.birth_date)
        .bind(employee.hire_date)
        .bind(&employee.address)
        .bind(&employee.city)
        .bind(&employee.region)
        .bind(&employee.postal_code)
        .bind(&employee.country)
        .bind(&employee.home_phone)
        .bind(&employee.extension)
        .bind(&employee.photo)
        .bind(&employee.notes)
        .bind(employee.reports_to)
        .bind(&employee.photo_path)
        .bind(employee.id)
        .execute(self.pool.inner())
        .await?;

        let updated = result.rows_affected() > 0;
        if updated {
            info!("Employee updated: {}", employee.id);
        }
        Ok(updated)
    }

    async fn delete(&self, employee_id: i32) -> NorthwindResult<bool> {
        ensure_positive_id(employee_id)?;
        debug!("Deleting employee: {}", employee_id);

        let result = sqlx::query("DELETE FROM Employees WHERE EmployeeID = ?")
            .bind(employee_id)
            .execute(self.pool.inner())
            .await?;

        let deleted = result.rows_affected() > 0;
        if deleted {
            info!("Employee deleted: {}", employee_id);
        }
        Ok(deleted)
    }
}
