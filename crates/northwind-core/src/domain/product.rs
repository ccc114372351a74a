//! Product model.

use crate::{validation::rules};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A product sold by Northwind.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Identifier assigned by the store; ignored on create.
    #[serde(default)]
    pub id: i32,

    /// Product name.
    #[validate(length(max = 40), custom(function = "rules::not_blank"))]
    pub name: String,

    /// Supplier reference.
    pub supplier_id: Option<i32>,

    /// Category reference.
    pub category_id: Option<i32>,

    /// Packaging description, e.g. "10 boxes x 20 bags".
    #[validate(length(max = 20))]
    pub quantity_per_unit: Option<String>,

    #[validate(range(min = 0.0))]
    pub unit_price: Option<f64>,

    #[validate(range(min = 0))]
    pub units_in_stock: Option<i16>,

    #[validate(range(min = 0))]
    pub units_on_order: Option<i16>,

    #[validate(range(min = 0))]
    pub reorder_level: Option<i16>,

    /// Whether the product is no longer sold.
    #[serde(default)]
    pub discontinued: bool,
}
