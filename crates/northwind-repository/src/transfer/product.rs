use sqlx::FromRow;

/// A row of the `Products` table.
#[derive(Debug, Clone, Default, PartialEq, FromRow)]
pub struct ProductTransferObject {
    pub id: i32,
    pub name: String,
    pub supplier_id: Option<i32>,
    pub category_id: Option<i32>,
    pub quantity_per_unit: Option<String>,
    pub unit_price: Option<f64>,
    pub units_in_stock: Option<i16>,
    pub units_on_order: Option<i16>,
    pub reorder_level: Option<i16>,
    pub discontinued: bool,
}
