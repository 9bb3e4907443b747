//! OTLP span export.

use std::time::Duration;

use opentelemetry::KeyValue;
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::{
    Resource,
    trace::{Sampler, SdkTracerProvider},
};

use crate::config::observability::TelemetryConfig;

use super::ObservabilityError;

pub(super) fn build_tracer_provider(
    telemetry: &TelemetryConfig,
    endpoint: &str,
) -> Result<SdkTracerProvider, ObservabilityError> {
    let exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .with_endpoint(endpoint)
        .with_timeout(Duration::from_secs(telemetry.otlp_timeout_seconds))
        .build()?;

    Ok(SdkTracerProvider::builder()
        .with_sampler(sampler(telemetry.trace_sample_ratio))
        .with_resource(resource(telemetry))
        .with_batch_exporter(exporter)
        .build())
}

fn resource(telemetry: &TelemetryConfig) -> Resource {
    Resource::builder_empty()
        .with_service_name(telemetry.service_name.clone())
        .with_attributes([
            KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
            KeyValue::new(
                "deployment.environment.name",
                telemetry.deployment_environment.clone(),
            ),
        ])
        .build()
}

/// Every request span is a root, so only the ratio decides.
fn sampler(ratio: f64) -> Sampler {
    if ratio >= 1.0 {
        Sampler::AlwaysOn
    } else {
        Sampler::TraceIdRatioBased(ratio)
    }
}

#[cfg(test)]
mod tests {
    use super::sampler;

    #[test]
    fn full_ratio_samples_everything() {
        assert!(matches!(sampler(1.0), super::Sampler::AlwaysOn), "ratio 1.0");
        assert!(
            matches!(sampler(0.1), super::Sampler::TraceIdRatioBased(_)),
            "ratio 0.1"
        );
    }
}
