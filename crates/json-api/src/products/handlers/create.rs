//! Create Product Handler

use std::sync::Arc;

use salvo::{http::header::LOCATION, oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{
    auth::authorize,
    extensions::*,
    products::{errors::ProductApiError, requests},
    state::State,
};

/// Product Created Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductCreatedResponse {
    pub ok: bool,

    /// Identifier assigned by the store
    pub id: i32,
}

/// Create Product Handler
#[endpoint(
    tags("products"),
    summary = "Create Product",
    security(("access_token" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Product created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Malformed body"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Missing or invalid access token"),
        (status_code = StatusCode::FORBIDDEN, description = "Access token not permitted"),
        (status_code = StatusCode::CONFLICT, description = "Product already exists"),
        (status_code = StatusCode::SERVICE_UNAVAILABLE, description = "Auth service unavailable"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ProductCreatedResponse>, ProductApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = requests::product_body(req).await?;

    authorize(req, state).await?;

    let id = state
        .app
        .products
        .create_product(request.into())
        .await?
        .id;

    res.add_header(LOCATION, format!("/product/{id}"), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    info!(product_id = %id, "created product");

    Ok(Json(ProductCreatedResponse {
        ok: true,
        id: id.into_i32(),
    }))
}

#[cfg(test)]
mod tests {
    use eshop_json_assert::JsonAssertions as _;
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use eshop_product_app::{
        auth::{ACCESS_TOKEN_HEADER, AuthValidationError, MockAuthValidator},
        domain::products::{MockProductsService, ProductsServiceError, data::NewProduct},
    };

    use crate::test_helpers::{
        TEST_ACCESS_TOKEN, accepting_auth, make_product, products_service, rejecting_auth,
        strict_auth_mock, strict_products_mock,
    };

    use super::*;

    fn make_service(products: MockProductsService, auth: MockAuthValidator) -> Service {
        products_service(products, auth, Router::with_path("product").post(handler))
    }

    fn only_create(products: &mut MockProductsService) {
        products.expect_list_products().never();
        products.expect_get_product().never();
        products.expect_edit_product().never();
        products.expect_delete_product().never();
    }

    fn socks() -> NewProduct {
        NewProduct {
            name: "Socks".to_owned(),
            kind: 5,
        }
    }

    #[tokio::test]
    async fn test_create_product_success() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_create_product()
            .once()
            .withf(|new| *new == socks())
            .return_once(|_| Ok(make_product(7, "Socks", 5)));

        only_create(&mut products);

        let mut res = TestClient::post("http://example.com/product")
            .add_header(ACCESS_TOKEN_HEADER, TEST_ACCESS_TOKEN, true)
            .json(&json!({ "name": "Socks", "type": 5 }))
            .send(&make_service(products, accepting_auth()))
            .await;

        let location = res
            .headers()
            .get("location")
            .and_then(|v| v.to_str().ok())
            .map(ToOwned::to_owned);

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(location.as_deref(), Some("/product/7"));

        res.take_string()
            .await?
            .should_match_json(r#"{"ok": true, "id": 7}"#);

        Ok(())
    }

    #[tokio::test]
    async fn test_create_product_conflict_returns_409() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_create_product()
            .once()
            .withf(|new| *new == socks())
            .return_once(|_| Err(ProductsServiceError::AlreadyExists));

        only_create(&mut products);

        let res = TestClient::post("http://example.com/product")
            .add_header(ACCESS_TOKEN_HEADER, TEST_ACCESS_TOKEN, true)
            .json(&json!({ "name": "Socks", "type": 5 }))
            .send(&make_service(products, accepting_auth()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CONFLICT));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_product_invalid_json_returns_400() -> TestResult {
        let res = TestClient::post("http://example.com/product")
            .add_header(ACCESS_TOKEN_HEADER, TEST_ACCESS_TOKEN, true)
            .raw_json("{\"name\": ")
            .send(&make_service(strict_products_mock(), strict_auth_mock()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_product_rejected_token_returns_401() -> TestResult {
        let res = TestClient::post("http://example.com/product")
            .add_header(ACCESS_TOKEN_HEADER, TEST_ACCESS_TOKEN, true)
            .json(&json!({ "name": "Socks", "type": 5 }))
            .send(&make_service(
                strict_products_mock(),
                rejecting_auth(AuthValidationError::InvalidToken),
            ))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));

        Ok(())
    }
}
