//! Get Product Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{
    auth::authorize,
    extensions::*,
    products::{errors::ProductApiError, requests, responses::ProductResponse},
    state::State,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductEnvelope {
    pub ok: bool,
    pub product: ProductResponse,
}

/// Get Product Handler
///
/// Returns a product.
#[endpoint(
    tags("products"),
    summary = "Get Product",
    security(("access_token" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Product found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Malformed id"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Missing or invalid access token"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::SERVICE_UNAVAILABLE, description = "Auth service unavailable"),
    ),
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<ProductEnvelope>, ProductApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let product = requests::product_id(req)?;

    authorize(req, state).await?;

    let product = state.app.products.get_product(product).await?;

    Ok(Json(ProductEnvelope {
        ok: true,
        product: product.into(),
    }))
}
