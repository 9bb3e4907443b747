//! Edit Product Handler

use std::sync::Arc;

use salvo::prelude::*;
use tracing::{Span, field, info};

use crate::{
    auth::authorize,
    extensions::*,
    products::{errors::ProductApiError, requests, responses::SuccessResult},
    state::State,
};

/// Edit Product Handler
///
/// Overwrites the name and type of an existing product.
#[endpoint(
    tags("products"),
    summary = "Edit Product",
    security(("access_token" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Product updated"),
        (status_code = StatusCode::BAD_REQUEST, description = "Malformed id or body"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Missing or invalid access token"),
        (status_code = StatusCode::FORBIDDEN, description = "Access token not permitted"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::SERVICE_UNAVAILABLE, description = "Auth service unavailable"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "products.edit",
    skip(req, depot),
    fields(product_id = field::Empty, product_type = field::Empty),
    err
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<SuccessResult>, ProductApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let product = requests::product_id(req)?;
    let request = requests::product_body(req).await?;

    let span = Span::current();

    span.record("product_id", field::display(product));
    span.record("product_type", request.kind);

    authorize(req, state).await?;

    state
        .app
        .products
        .edit_product(product, request.into())
        .await?;

    info!(product_id = %product, "edited product");

    Ok(Json(SuccessResult::success()))
}
