//! Server configuration module

use std::net::SocketAddr;

use clap::Parser;

use crate::config::{
    auth::AuthConfig,
    db::StoreConfig,
    listen::ListenConfig,
    observability::{LoggingConfig, TelemetryConfig},
};

pub(crate) mod auth;
pub(crate) mod db;
pub(crate) mod listen;
pub(crate) mod observability;

pub(crate) use observability::LogFormat;

/// Product JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "eshop-product-json", about = "Product JSON API Server", long_about = None)]
pub struct ServerConfig {
    #[command(flatten)]
    pub listen: ListenConfig,

    #[command(flatten)]
    pub logging: LoggingConfig,

    #[command(flatten)]
    pub telemetry: TelemetryConfig,

    #[command(flatten)]
    pub store: StoreConfig,

    #[command(flatten)]
    pub auth: AuthConfig,
}

impl ServerConfig {
    /// Load configuration from `.env`, the environment and CLI arguments.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // A missing .env is fine.
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    #[must_use]
    pub fn socket_addr(&self) -> SocketAddr {
        self.listen.socket_addr()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use testresult::TestResult;

    use super::*;

    const REQUIRED: [&str; 5] = [
        "eshop-product-json",
        "--database-url",
        "postgres://localhost/eshop",
        "--auth-base-url",
        "http://auth.local",
    ];

    #[test]
    fn parses_required_settings_with_defaults() -> TestResult {
        let config = ServerConfig::try_parse_from(REQUIRED)?;

        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8698");
        assert_eq!(config.store.database_max_connections, 10);
        assert_eq!(
            config.telemetry.slow_request_threshold(),
            Duration::from_secs(1)
        );

        let auth = config.auth.service_config();

        assert_eq!(auth.base_url, "http://auth.local");
        assert_eq!(auth.timeout, Duration::from_secs(2));

        Ok(())
    }

    #[test]
    fn explicit_settings_override_defaults() -> TestResult {
        let args = REQUIRED.into_iter().chain([
            "--host",
            "127.0.0.1",
            "--port",
            "9000",
            "--auth-timeout-ms",
            "250",
            "--log-format",
            "json",
        ]);

        let config = ServerConfig::try_parse_from(args)?;

        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:9000");
        assert_eq!(config.auth.service_config().timeout, Duration::from_millis(250));
        assert_eq!(config.logging.log_format, LogFormat::Json);

        Ok(())
    }

    #[test]
    fn auth_base_url_is_required() {
        let config = ServerConfig::try_parse_from(REQUIRED.into_iter().take(3));

        assert!(config.is_err(), "expected missing auth base url to fail");
    }

    #[test]
    fn out_of_range_settings_are_rejected() {
        for (flag, value) in [
            ("--database-max-connections", "0"),
            ("--auth-timeout-ms", "0"),
            ("--trace-sample-ratio", "1.5"),
            ("--host", "not-an-address"),
        ] {
            let args = REQUIRED.into_iter().chain([flag, value]);

            assert!(
                ServerConfig::try_parse_from(args).is_err(),
                "expected {flag} {value} to be rejected"
            );
        }
    }
}
