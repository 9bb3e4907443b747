//! Logging & Telemetry Config

use std::time::Duration;

use clap::Args;

/// Log output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    /// One human-readable line per event.
    Compact,

    /// One JSON object per event, with the enclosing request span.
    Json,
}

/// Logging settings.
#[derive(Debug, Args)]
pub struct LoggingConfig {
    /// Default level directive when `RUST_LOG` carries no filter
    #[arg(short, long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,

    /// Log format (compact, json)
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

/// Trace export and request timing settings.
#[derive(Debug, Args)]
pub struct TelemetryConfig {
    /// OTLP gRPC collector; trace export stays off while unset
    #[arg(long, env = "OTEL_EXPORTER_OTLP_ENDPOINT")]
    pub otlp_endpoint: Option<String>,

    /// Seconds the OTLP exporter may spend on one batch
    #[arg(long, env = "OTEL_EXPORTER_OTLP_TIMEOUT_SECONDS", default_value_t = 3)]
    pub otlp_timeout_seconds: u64,

    /// `service.name` resource attribute
    #[arg(long, env = "OTEL_SERVICE_NAME", default_value = "eshop-product-json")]
    pub service_name: String,

    /// `deployment.environment.name` resource attribute
    #[arg(long, env = "OTEL_DEPLOYMENT_ENVIRONMENT", default_value = "development")]
    pub deployment_environment: String,

    /// Share of root traces kept, between 0.0 and 1.0
    #[arg(
        long,
        env = "OTEL_TRACE_SAMPLE_RATIO",
        default_value_t = 1.0,
        value_parser = parse_sample_ratio
    )]
    pub trace_sample_ratio: f64,

    /// Requests slower than this many milliseconds are logged as warnings
    #[arg(long, env = "SLOW_REQUEST_THRESHOLD_MS", default_value_t = 1_000)]
    pub slow_request_threshold_ms: u64,
}

impl TelemetryConfig {
    #[must_use]
    pub fn slow_request_threshold(&self) -> Duration {
        Duration::from_millis(self.slow_request_threshold_ms)
    }
}

fn parse_sample_ratio(raw: &str) -> Result<f64, String> {
    let ratio: f64 = raw
        .parse()
        .map_err(|source| format!("`{raw}` is not a number: {source}"))?;

    if (0.0..=1.0).contains(&ratio) {
        Ok(ratio)
    } else {
        Err(format!("sample ratio {ratio} is outside 0.0..=1.0"))
    }
}

#[cfg(test)]
mod tests {
    use super::parse_sample_ratio;

    #[test]
    fn sample_ratio_must_be_a_fraction() {
        assert!(
            matches!(parse_sample_ratio("0.25"), Ok(ratio) if (ratio - 0.25).abs() < f64::EPSILON),
            "in-range ratio"
        );
        assert!(
            matches!(parse_sample_ratio("1"), Ok(ratio) if (ratio - 1.0).abs() < f64::EPSILON),
            "whole ratio"
        );
        assert!(parse_sample_ratio("-0.5").is_err(), "negative ratio");
        assert!(parse_sample_ratio("7").is_err(), "ratio above one");
        assert!(parse_sample_ratio("half").is_err(), "not a number");
    }
}
