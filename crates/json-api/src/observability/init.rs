//! Subscriber installation and exporter shutdown.

use opentelemetry_sdk::trace::SdkTracerProvider;
use tracing::{error, info};

use crate::config::ServerConfig;

use super::{ObservabilityError, logging, otel};

/// Owns the trace exporter, if any, so it can be flushed on shutdown.
#[derive(Debug)]
pub(crate) struct Observability {
    tracer_provider: Option<SdkTracerProvider>,
}

impl Observability {
    /// Install the log subscriber, adding OTLP export when a collector is configured.
    pub(crate) fn init(config: &ServerConfig) -> Result<Self, ObservabilityError> {
        let telemetry = &config.telemetry;

        let tracer_provider = telemetry
            .otlp_endpoint
            .as_deref()
            .map(|endpoint| otel::build_tracer_provider(telemetry, endpoint))
            .transpose()?;

        logging::init_subscriber(&config.logging, telemetry, tracer_provider.as_ref())?;

        match &telemetry.otlp_endpoint {
            Some(endpoint) => info!(endpoint = %endpoint, "exporting traces over OTLP"),
            None => info!("trace export disabled"),
        }

        Ok(Self { tracer_provider })
    }

    /// Flush buffered spans.
    pub(crate) fn shutdown(self) {
        if let Some(provider) = self.tracer_provider
            && let Err(source) = provider.shutdown()
        {
            error!("failed to flush spans on shutdown: {source}");
        }
    }
}
