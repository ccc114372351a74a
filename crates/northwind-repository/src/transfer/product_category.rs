use sqlx::FromRow;

/// A row of the `Categories` table.
#[derive(Debug, Clone, Default, PartialEq, FromRow)]
pub struct ProductCategoryTransferObject {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    /// Picture blob, 78-byte reserved header included.
    pub picture: Option<Vec<u8>>,
}
