//! Product Errors

use salvo::{
    Response, Scribe,
    http::StatusCode,
    oapi::{Components, EndpointOutRegister, Operation},
    prelude::Json,
};
use thiserror::Error;
use tracing::error;

use eshop_product_app::domain::products::ProductsServiceError;

use crate::products::responses::SuccessResult;

/// Every way a product request can fail, each answered with `{"ok": false}`.
#[derive(Debug, Error)]
pub(crate) enum ProductApiError {
    #[error("could not decode request: {0}")]
    Decoding(String),

    #[error("product not found")]
    NotFound,

    #[error("access token missing or rejected")]
    Unauthorized,

    #[error("access token not permitted")]
    Forbidden,

    #[error("auth service unavailable")]
    AuthServiceUnavailable,

    #[error("product already exists")]
    Conflict,

    #[error("internal error: {0}")]
    Internal(String),
}

impl ProductApiError {
    pub(crate) fn status_code(&self) -> StatusCode {
        match self {
            Self::Decoding(_) => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::AuthServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            Self::Conflict => StatusCode::CONFLICT,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ProductsServiceError> for ProductApiError {
    fn from(error: ProductsServiceError) -> Self {
        match error {
            ProductsServiceError::NotFound => Self::NotFound,
            ProductsServiceError::AlreadyExists => Self::Conflict,
            ProductsServiceError::InvalidData => {
                Self::Decoding("product rejected by the store".to_owned())
            }
            ProductsServiceError::Sql(source) => Self::Internal(format!("storage failure: {source}")),
        }
    }
}

impl Scribe for ProductApiError {
    fn render(self, res: &mut Response) {
        if let Self::Internal(context) = &self {
            error!("{context}");
        }

        res.status_code(self.status_code());
        res.render(Json(SuccessResult::failure()));
    }
}

impl EndpointOutRegister for ProductApiError {
    fn register(_components: &mut Components, _operation: &mut Operation) {}
}

#[cfg(test)]
mod tests {
    use eshop_json_assert::JsonAssertions as _;
    use salvo::{
        prelude::*,
        test::{ResponseExt, TestClient},
    };
    use testresult::TestResult;

    use super::*;

    #[handler]
    async fn failing() -> Result<&'static str, ProductApiError> {
        Err(ProductApiError::AuthServiceUnavailable)
    }

    #[test]
    fn maps_each_variant_to_its_status() {
        let cases = [
            (ProductApiError::Decoding("x".to_owned()), StatusCode::BAD_REQUEST),
            (ProductApiError::NotFound, StatusCode::NOT_FOUND),
            (ProductApiError::Unauthorized, StatusCode::UNAUTHORIZED),
            (ProductApiError::Forbidden, StatusCode::FORBIDDEN),
            (
                ProductApiError::AuthServiceUnavailable,
                StatusCode::SERVICE_UNAVAILABLE,
            ),
            (ProductApiError::Conflict, StatusCode::CONFLICT),
            (
                ProductApiError::Internal("x".to_owned()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, status) in cases {
            assert_eq!(error.status_code(), status, "status for {error:?}");
        }
    }

    #[test]
    fn service_errors_keep_their_meaning() {
        assert!(matches!(
            ProductApiError::from(ProductsServiceError::NotFound),
            ProductApiError::NotFound
        ));
        assert!(matches!(
            ProductApiError::from(ProductsServiceError::AlreadyExists),
            ProductApiError::Conflict
        ));
        assert!(matches!(
            ProductApiError::from(ProductsServiceError::InvalidData),
            ProductApiError::Decoding(_)
        ));
    }

    #[tokio::test]
    async fn renders_failure_body_with_status() -> TestResult {
        let service = Service::new(Router::with_path("fail").get(failing));

        let mut res = TestClient::get("http://example.com/fail").send(&service).await;

        assert_eq!(res.status_code, Some(StatusCode::SERVICE_UNAVAILABLE));

        res.take_string().await?.should_match_json(r#"{"ok":false}"#);

        Ok(())
    }
}
