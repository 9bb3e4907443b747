//! Product Responses

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use eshop_product_app::domain::products::records::ProductRecord;

/// Bare outcome flag returned by every mutation, and by every failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub(crate) struct SuccessResult {
    pub ok: bool,
}

impl SuccessResult {
    pub(crate) const fn success() -> Self {
        Self { ok: true }
    }

    pub(crate) const fn failure() -> Self {
        Self { ok: false }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductResponse {
    /// Product identifier
    pub id: i32,

    /// Product name
    pub name: String,

    /// Numeric product type
    #[serde(rename = "type")]
    pub kind: i32,
}

impl From<ProductRecord> for ProductResponse {
    fn from(product: ProductRecord) -> Self {
        ProductResponse {
            id: product.id.into_i32(),
            name: product.name,
            kind: product.kind,
        }
    }
}
