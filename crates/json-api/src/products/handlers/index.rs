//! List Products Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{
    auth::authorize,
    extensions::*,
    products::{errors::ProductApiError, responses::ProductResponse},
    state::State,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductsResponse {
    pub ok: bool,
    pub products: Vec<ProductResponse>,
}

/// List Products Handler
///
/// Returns every product ordered by id.
#[endpoint(
    tags("products"),
    summary = "List Products",
    security(("access_token" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Products listed"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Missing or invalid access token"),
        (status_code = StatusCode::SERVICE_UNAVAILABLE, description = "Auth service unavailable"),
    ),
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<ProductsResponse>, ProductApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    authorize(req, state).await?;

    let products = state.app.products.list_products().await?;

    Ok(Json(ProductsResponse {
        ok: true,
        products: products.into_iter().map(Into::into).collect(),
    }))
}
