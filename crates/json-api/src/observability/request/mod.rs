//! Per-request span, request id, metrics and outcome logging.

mod request_ids;
mod spans;

use std::time::{Duration, Instant};

use salvo::{
    Request,
    prelude::{Depot, FlowCtrl, Handler, Response, async_trait},
};
use tracing::{Instrument as _, Span, error, info, warn};

use eshop_product_app::auth::ACCESS_TOKEN_HEADER;

use self::request_ids::RequestId;
use super::metrics;

/// Hoop wrapping every routed request, except metric scrapes, in an `http.request` span.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RequestLogging {
    slow_request_threshold: Duration,
}

impl RequestLogging {
    pub(crate) fn new(slow_request_threshold: Duration) -> Self {
        Self {
            slow_request_threshold,
        }
    }
}

#[async_trait]
impl Handler for RequestLogging {
    async fn handle(
        &self,
        req: &mut Request,
        depot: &mut Depot,
        res: &mut Response,
        ctrl: &mut FlowCtrl,
    ) {
        if req.uri().path() == "/metrics" {
            ctrl.call_next(req, depot, res).await;
            return;
        }

        let started = Instant::now();
        let _in_flight = metrics::InFlightRequest::start();

        let request_id = RequestId::from_headers(req.headers());

        request_id.write_to(res.headers_mut());

        let method = req.method().to_string();
        let path = req.uri().path().to_owned();
        let route = spans::route_template(&path);

        // Only presence is recorded; the token itself never reaches a log line.
        let span = tracing::info_span!(
            parent: None,
            "http.request",
            otel.name = %format!("{method} {route}"),
            otel.kind = "server",
            request_id = %request_id,
            method = %method,
            route = %route,
            remote_addr = %req.remote_addr(),
            auth.token_present = req.headers().contains_key(ACCESS_TOKEN_HEADER),
            status = tracing::field::Empty,
            duration_ms = tracing::field::Empty,
        );

        ctrl.call_next(req, depot, res)
            .instrument(span.clone())
            .await;

        let elapsed = started.elapsed();
        let status = request_ids::status_or_ok(res.status_code);

        metrics::observe_request(&method, &route, status, elapsed.as_secs_f64());

        self.log_outcome(&span, status, elapsed);
    }
}

impl RequestLogging {
    fn log_outcome(&self, span: &Span, status: salvo::http::StatusCode, elapsed: Duration) {
        let duration_ms = elapsed.as_millis();

        span.record("status", status.as_u16());
        span.record("duration_ms", duration_ms);

        span.in_scope(|| {
            if status.is_server_error() {
                error!(status = status.as_u16(), duration_ms, "request failed");
            } else if status.is_client_error() {
                warn!(status = status.as_u16(), duration_ms, "request rejected");
            } else {
                info!(status = status.as_u16(), duration_ms, "request completed");
            }

            if elapsed > self.slow_request_threshold {
                warn!(
                    duration_ms,
                    threshold_ms = self.slow_request_threshold.as_millis(),
                    "slow request"
                );
            }
        });
    }
}
