//! Product request decoding.
//!
//! Everything here runs before the access token is checked, so a malformed request
//! never reaches the auth service or the store.

use salvo::{Request, oapi::ToSchema};
use serde::{Deserialize, Serialize};

use eshop_product_app::domain::products::{
    data::{NewProduct, ProductUpdate},
    records::ProductId,
};

use crate::products::errors::ProductApiError;

/// Product Request
///
/// Body of both create and edit; every field is required.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductRequest {
    /// Product name, must not be blank
    pub name: String,

    /// Numeric product type
    #[serde(rename = "type")]
    pub kind: i32,
}

impl From<ProductRequest> for NewProduct {
    fn from(request: ProductRequest) -> Self {
        NewProduct {
            name: request.name,
            kind: request.kind,
        }
    }
}

impl From<ProductRequest> for ProductUpdate {
    fn from(request: ProductRequest) -> Self {
        ProductUpdate {
            name: request.name,
            kind: request.kind,
        }
    }
}

/// Decode the positive integer `{id}` path segment.
pub(crate) fn product_id(req: &Request) -> Result<ProductId, ProductApiError> {
    let raw = req.param::<String>("id").unwrap_or_default();

    match raw.parse::<i32>() {
        Ok(id) if id > 0 => Ok(ProductId::from_i32(id)),
        _ => Err(ProductApiError::Decoding(format!(
            "product id must be a positive integer, got {raw:?}"
        ))),
    }
}

/// Decode and check a [`ProductRequest`] body.
pub(crate) async fn product_body(req: &mut Request) -> Result<ProductRequest, ProductApiError> {
    let request = req
        .parse_json::<ProductRequest>()
        .await
        .map_err(|error| ProductApiError::Decoding(error.to_string()))?;

    if request.name.trim().is_empty() {
        return Err(ProductApiError::Decoding("name must not be blank".to_owned()));
    }

    Ok(request)
}
