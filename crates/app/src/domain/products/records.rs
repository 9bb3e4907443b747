//! Product Records

use crate::ids::TypedId;

/// Product ID
pub type ProductId = TypedId<ProductRecord>;

/// Product Record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRecord {
    pub id: ProductId,
    pub name: String,

    /// Category code, stored in the `type` column.
    pub kind: i32,
}
