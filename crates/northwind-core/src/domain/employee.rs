//! Employee model.

use crate::{encoding::base64_bytes, validation::rules};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A Northwind employee.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    #[serde(default)]
    pub id: i32,

    #[validate(length(max = 20), custom(function = "rules::not_blank"))]
    pub last_name: String,

    #[validate(length(max = 10), custom(function = "rules::not_blank"))]
    pub first_name: String,

    #[validate(length(max = 30))]
    pub title: Option<String>,

    /// e.g. "Ms.", "Dr."
    #[validate(length(max = 25))]
    pub title_of_courtesy: Option<String>,

    pub birth_date: Option<NaiveDateTime>,

    pub hire_date: Option<NaiveDateTime>,

    #[validate(length(max = 60))]
    pub address: Option<String>,

    #[validate(length(max = 15))]
    pub city: Option<String>,

    #[validate(length(max = 15))]
    pub region: Option<String>,

    #[validate(length(max = 10))]
    pub postal_code: Option<String>,

    #[validate(length(max = 15))]
    pub country: Option<String>,

    #[validate(length(max = 24))]
    pub home_phone: Option<String>,

    #[validate(length(max = 4))]
    pub extension: Option<String>,

    /// Raw photo column, reserved header included, as base64.
    #[serde(default, with = "base64_bytes")]
    #[cfg_attr(feature = "openapi", schema(value_type = Option<String>, format = Byte))]
    pub photo: Option<Vec<u8>>,

    pub notes: Option<String>,

    /// Manager's employee id.
    pub reports_to: Option<i32>,

    #[validate(length(max = 255))]
    pub photo_path: Option<String>,
}
