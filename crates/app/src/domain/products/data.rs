//! Products Data

/// New Product Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub name: String,
    pub kind: i32,
}

/// Product Update Data
///
/// Overwrites both mutable columns of an existing product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductUpdate {
    pub name: String,
    pub kind: i32,
}
