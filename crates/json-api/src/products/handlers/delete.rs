//! Delete Product Handler

use std::sync::Arc;

use salvo::prelude::*;
use tracing::info;

use crate::{
    auth::authorize,
    extensions::*,
    products::{errors::ProductApiError, requests, responses::SuccessResult},
    state::State,
};

/// Delete Product Handler
#[endpoint(
    tags("products"),
    summary = "Delete Product",
    security(("access_token" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Product deleted"),
        (status_code = StatusCode::BAD_REQUEST, description = "Malformed id"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Missing or invalid access token"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::SERVICE_UNAVAILABLE, description = "Auth service unavailable"),
    ),
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<SuccessResult>, ProductApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let product = requests::product_id(req)?;

    authorize(req, state).await?;

    state.app.products.delete_product(product).await?;

    info!(product_id = %product, "deleted product");

    Ok(Json(SuccessResult::success()))
}
