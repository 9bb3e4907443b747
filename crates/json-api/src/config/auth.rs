//! Auth Config

use std::time::Duration;

use clap::Args;

use eshop_product_app::auth::AuthServiceConfig;

/// Auth service settings.
#[derive(Debug, Args)]
pub struct AuthConfig {
    /// Base URL of the auth service that validates access tokens
    #[arg(long = "auth-base-url", env = "AUTH_BASE_URL")]
    pub base_url: String,

    /// Milliseconds to wait for a token verdict before answering 503
    #[arg(
        long = "auth-timeout-ms",
        env = "AUTH_TIMEOUT_MS",
        default_value_t = 2_000,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout_ms: u64,
}

impl AuthConfig {
    /// Settings for the auth service client.
    #[must_use]
    pub fn service_config(&self) -> AuthServiceConfig {
        AuthServiceConfig {
            base_url: self.base_url.clone(),
            timeout: Duration::from_millis(self.timeout_ms),
        }
    }
}
