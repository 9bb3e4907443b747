//! Correlation ids carried in `x-request-id`.

use std::fmt;

use salvo::http::{HeaderMap, HeaderValue, StatusCode};
use tracing::warn;
use uuid::Uuid;

pub(super) const REQUEST_ID_HEADER: &str = "x-request-id";

/// The caller's correlation id, or a fresh UUIDv7 when none usable was sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct RequestId(String);

impl RequestId {
    pub(super) fn from_headers(headers: &HeaderMap) -> Self {
        headers
            .get(REQUEST_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map_or_else(
                || Self(Uuid::now_v7().to_string()),
                |value| Self(value.to_owned()),
            )
    }

    /// Echo the id back to the caller.
    pub(super) fn write_to(&self, headers: &mut HeaderMap) {
        match HeaderValue::from_str(&self.0) {
            Ok(value) => {
                headers.insert(REQUEST_ID_HEADER, value);
            }
            Err(source) => warn!(request_id = %self, "request id is not a valid header value: {source}"),
        }
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Salvo leaves the status unset when a handler rendered without choosing one.
pub(super) fn status_or_ok(status: Option<StatusCode>) -> StatusCode {
    status.unwrap_or(StatusCode::OK)
}
