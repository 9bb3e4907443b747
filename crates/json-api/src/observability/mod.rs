//! Logs, traces and metrics for the product API.

use thiserror::Error;

mod init;
mod logging;
mod metrics;
mod otel;
mod request;

pub(crate) use init::Observability;
pub(crate) use metrics::{metrics_handler, record_auth_check};
pub(crate) use request::RequestLogging;

#[derive(Debug, Error)]
pub(crate) enum ObservabilityError {
    #[error("could not build the OTLP span exporter: {0}")]
    OtlpExporter(#[from] opentelemetry_otlp::ExporterBuildError),

    #[error("a global tracing subscriber is already installed: {0}")]
    SubscriberInstalled(#[from] tracing_subscriber::util::TryInitError),
}
