//! Product category model.

use crate::{encoding::base64_bytes, validation::rules};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A grouping of products, e.g. "Beverages".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ProductCategory {
    #[serde(default)]
    pub id: i32,

    #[validate(length(max = 15), custom(function = "rules::not_blank"))]
    pub name: String,

    pub description: Option<String>,

    /// Raw picture column, reserved header included, as base64.
    #[serde(default, with = "base64_bytes")]
    #[cfg_attr(feature = "openapi", schema(value_type = Option<String>, format = Byte))]
    pub picture: Option<Vec<u8>>,
}
