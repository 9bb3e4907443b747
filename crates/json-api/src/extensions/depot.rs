//! Depot helper extensions.

use std::any::Any;

use salvo::prelude::Depot;

use crate::products::errors::ProductApiError;

/// Helpers for mapping depot extraction failures to HTTP errors.
pub(crate) trait DepotExt {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, ProductApiError>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, ProductApiError> {
        self.obtain::<T>()
            .map_err(|_ignored| ProductApiError::Internal("state missing from depot".to_owned()))
    }
}
