//! Log subscriber assembly.

use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::trace::SdkTracerProvider;
use tracing_subscriber::{
    EnvFilter, Layer, Registry, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::config::{
    LogFormat,
    observability::{LoggingConfig, TelemetryConfig},
};

use super::ObservabilityError;

/// Dependencies that log per query or per connection at `info`.
const QUIET_TARGETS: [&str; 7] = [
    "h2", "hyper", "hyper_util", "reqwest", "sqlx", "tonic", "opentelemetry",
];

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

pub(super) fn init_subscriber(
    logging: &LoggingConfig,
    telemetry: &TelemetryConfig,
    tracer_provider: Option<&SdkTracerProvider>,
) -> Result<(), ObservabilityError> {
    let otel_layer = tracer_provider.map(|provider| {
        tracing_opentelemetry::layer()
            .with_tracer(provider.tracer(telemetry.service_name.clone()))
            .boxed()
    });

    tracing_subscriber::registry()
        .with(format_layer(logging.log_format))
        .with(otel_layer)
        .with(env_filter(&logging.log_level))
        .try_init()?;

    Ok(())
}

fn format_layer(format: LogFormat) -> BoxedLayer {
    match format {
        LogFormat::Compact => tracing_subscriber::fmt::layer()
            .compact()
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .boxed(),
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .with_current_span(true)
            .with_span_list(true)
            .with_target(true)
            .boxed(),
    }
}

fn env_filter(log_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_directives(log_level)))
}

fn filter_directives(log_level: &str) -> String {
    QUIET_TARGETS
        .iter()
        .fold(log_level.to_owned(), |directives, target| {
            format!("{directives},{target}=warn")
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_level_leads_the_directives() {
        let directives = filter_directives("debug");

        assert!(directives.starts_with("debug,"), "got {directives}");
        assert!(directives.contains("sqlx=warn"), "got {directives}");
        assert!(directives.ends_with("opentelemetry=warn"), "got {directives}");
    }

    #[test]
    fn directives_parse_as_a_filter() {
        let parsed = EnvFilter::try_new(filter_directives("info"));

        assert!(parsed.is_ok(), "got {parsed:?}");
    }
}
