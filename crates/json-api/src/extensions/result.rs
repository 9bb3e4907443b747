//! Result helper extensions for HTTP handlers.

use std::fmt::Display;

use crate::products::errors::ProductApiError;

/// Map any error to an internal server error carrying `context`.
pub(crate) trait ResultExt<T> {
    fn or_500(self, context: &str) -> Result<T, ProductApiError>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Display,
{
    fn or_500(self, context: &str) -> Result<T, ProductApiError> {
        self.map_err(|error| ProductApiError::Internal(format!("{context}: {error}")))
    }
}
