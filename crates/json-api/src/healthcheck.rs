//! Liveness endpoint.

use salvo::{oapi::ToSchema, prelude::*};
use serde::Serialize;

/// Liveness report.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Always `"ok"` while the process serves requests.
    pub status: String,

    /// Version of the running product API build.
    pub version: String,
}

/// Reports that the product API is up, without touching the store or the auth service.
#[endpoint(tags("health"), summary = "Liveness check")]
pub(crate) async fn handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_owned(),
        version: env!("CARGO_PKG_VERSION").to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use eshop_json_assert::JsonAssertions as _;
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use super::*;

    #[tokio::test]
    async fn reports_status_and_version() -> TestResult {
        let router = Router::new().push(Router::with_path("healthcheck").get(handler));

        let body = TestClient::get("http://example.com/healthcheck")
            .send(&Service::new(router))
            .await
            .take_string()
            .await?;

        body.should_contain_json_key_value("$.status", "ok");
        body.should_contain_json_key_value("$.version", env!("CARGO_PKG_VERSION"));
        body.should_contain_exactly_key_value_pairs(2);

        Ok(())
    }
}
