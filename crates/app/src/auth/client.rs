//! HTTP client for the auth service token validation endpoint.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::auth::AuthClientError;

/// `X-Access-Token`, carrying the caller's access token both inbound and towards the
/// auth service. Lowercase so it can be used as a static header name.
pub const ACCESS_TOKEN_HEADER: &str = "x-access-token";

/// Configuration for reaching the auth service.
#[derive(Debug, Clone)]
pub struct AuthServiceConfig {
    /// Auth service base URL, e.g. `"http://auth:8080"`.
    pub base_url: String,

    /// Upper bound on one validation round trip.
    pub timeout: Duration,
}

/// What the auth service said about a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenStatus {
    Valid,
    Invalid,
    Forbidden,
}

/// HTTP client for the auth service.
#[derive(Debug, Clone)]
pub struct AuthServiceClient {
    config: AuthServiceConfig,
    http: Client,
}

impl AuthServiceClient {
    /// Create a new client from the given configuration.
    #[must_use]
    pub fn new(config: AuthServiceConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    /// Ask the auth service whether `access_token` is currently valid.
    ///
    /// A `401` or a `{"ok": false}` body means the token is invalid, a `403` means it
    /// is known but not allowed.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or timeout, any other status, or an
    /// unreadable body.
    pub async fn validate(&self, access_token: &str) -> Result<TokenStatus, AuthClientError> {
        let url = format!(
            "{}/v1/validate",
            self.config.base_url.trim_end_matches('/')
        );

        let response = self
            .http
            .get(&url)
            .header(ACCESS_TOKEN_HEADER, access_token)
            .timeout(self.config.timeout)
            .send()
            .await?;

        match response.status() {
            StatusCode::UNAUTHORIZED => return Ok(TokenStatus::Invalid),
            StatusCode::FORBIDDEN => return Ok(TokenStatus::Forbidden),
            status if !status.is_success() => {
                let text = response.text().await.unwrap_or_default();

                return Err(AuthClientError::UnexpectedResponse(format!(
                    "validate request failed with status {status}: {text}"
                )));
            }
            _ => {}
        }

        let parsed: ValidateResponse = response.json().await?;

        Ok(if parsed.ok {
            TokenStatus::Valid
        } else {
            TokenStatus::Invalid
        })
    }
}

#[derive(Debug, Deserialize)]
struct ValidateResponse {
    ok: bool,
}
