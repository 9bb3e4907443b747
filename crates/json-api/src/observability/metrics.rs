//! Prometheus metrics for the product API and its `/metrics` endpoint.

use std::sync::OnceLock;

use prometheus::{
    Encoder, HistogramOpts, HistogramVec, IntCounterVec, IntGauge, Opts, Registry, TextEncoder,
    core::Collector,
};
use salvo::{
    Request, Response, handler,
    http::{
        StatusCode,
        header::{CONTENT_TYPE, HeaderValue},
    },
};
use tracing::error;

const DURATION_BUCKETS: [f64; 13] = [
    0.001, 0.0025, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0,
];

#[derive(Debug)]
struct ServiceMetrics {
    registry: Registry,
    requests_total: IntCounterVec,
    request_duration_seconds: HistogramVec,
    requests_in_flight: IntGauge,
    auth_checks_total: IntCounterVec,
}

impl ServiceMetrics {
    fn build() -> prometheus::Result<Self> {
        let registry = Registry::new();

        let requests_total = register(
            &registry,
            IntCounterVec::new(
                Opts::new(
                    "eshop_product_http_requests_total",
                    "HTTP requests by method, route and response status.",
                ),
                &["method", "route", "status_class", "status_code"],
            )?,
        )?;

        let request_duration_seconds = register(
            &registry,
            HistogramVec::new(
                HistogramOpts::new(
                    "eshop_product_http_request_duration_seconds",
                    "HTTP request latency by method and route.",
                )
                .buckets(DURATION_BUCKETS.to_vec()),
                &["method", "route"],
            )?,
        )?;

        let requests_in_flight = register(
            &registry,
            IntGauge::new(
                "eshop_product_http_requests_in_flight",
                "HTTP requests currently being served.",
            )?,
        )?;

        let auth_checks_total = register(
            &registry,
            IntCounterVec::new(
                Opts::new(
                    "eshop_product_auth_checks_total",
                    "Access token checks by outcome.",
                ),
                &["outcome"],
            )?,
        )?;

        Ok(Self {
            registry,
            requests_total,
            request_duration_seconds,
            requests_in_flight,
            auth_checks_total,
        })
    }
}

fn register<C>(registry: &Registry, collector: C) -> prometheus::Result<C>
where
    C: Collector + Clone + 'static,
{
    registry.register(Box::new(collector.clone()))?;

    Ok(collector)
}

static METRICS: OnceLock<Option<ServiceMetrics>> = OnceLock::new();

/// `None` when registration failed; the failure is logged once and the service
/// keeps running without metrics.
fn metrics() -> Option<&'static ServiceMetrics> {
    METRICS
        .get_or_init(|| {
            ServiceMetrics::build()
                .inspect_err(|source| error!("failed to register service metrics: {source}"))
                .ok()
        })
        .as_ref()
}

/// Holds the in-flight gauge up for as long as it lives.
#[derive(Debug)]
pub(super) struct InFlightRequest(Option<&'static IntGauge>);

impl InFlightRequest {
    pub(super) fn start() -> Self {
        let gauge = metrics().map(|metrics| &metrics.requests_in_flight);

        if let Some(gauge) = gauge {
            gauge.inc();
        }

        Self(gauge)
    }
}

impl Drop for InFlightRequest {
    fn drop(&mut self) {
        if let Some(gauge) = self.0 {
            gauge.dec();
        }
    }
}

pub(super) fn observe_request(method: &str, route: &str, status: StatusCode, seconds: f64) {
    let Some(metrics) = metrics() else {
        return;
    };

    let status_code = status.as_str();

    metrics
        .requests_total
        .with_label_values(&[method, route, status_class(status), status_code])
        .inc();

    metrics
        .request_duration_seconds
        .with_label_values(&[method, route])
        .observe(seconds);
}

/// Count one access token check under `outcome`.
pub(crate) fn record_auth_check(outcome: &str) {
    if let Some(metrics) = metrics() {
        metrics.auth_checks_total.with_label_values(&[outcome]).inc();
    }
}

#[handler]
pub(crate) async fn metrics_handler(res: &mut Response) {
    let Some(metrics) = metrics() else {
        res.status_code(StatusCode::SERVICE_UNAVAILABLE);
        return;
    };

    let encoder = TextEncoder::new();
    let mut body = Vec::new();

    if let Err(source) = encoder.encode(&metrics.registry.gather(), &mut body) {
        error!("failed to encode metrics: {source}");
        res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
        return;
    }

    match HeaderValue::from_str(encoder.format_type()) {
        Ok(content_type) => {
            res.headers_mut().insert(CONTENT_TYPE, content_type);
        }
        Err(source) => error!("failed to encode metrics content type: {source}"),
    }

    res.render(String::from_utf8_lossy(&body).into_owned());
}

fn status_class(status: StatusCode) -> &'static str {
    match status.as_u16() / 100 {
        1 => "1xx",
        2 => "2xx",
        3 => "3xx",
        4 => "4xx",
        5 => "5xx",
        _ => "other",
    }
}
