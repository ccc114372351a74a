use chrono::NaiveDateTime;
use sqlx::FromRow;

/// A row of the `Employees` table.
#[derive(Debug, Clone, Default, PartialEq, FromRow)]
pub struct EmployeeTransferObject {
    pub id: i32,
    pub last_name: String,
    pub first_name: String,
    pub title: Option<String>,
    pub title_of_courtesy: Option<String>,
    pub birth_date: Option<NaiveDateTime>,
    pub hire_date: Option<NaiveDateTime>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub region: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
    pub home_phone: Option<String>,
    pub extension: Option<String>,
    /// Photo blob, 78-byte reserved header included.
    pub photo: Option<Vec<u8>>,
    pub notes: Option<String>,
    pub reports_to: Option<i32>,
    pub photo_path: Option<String>,
}
