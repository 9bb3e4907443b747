//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    auth::{AuthServiceConfig, AuthValidator, HttpAuthValidator},
    database::{self, Db},
    domain::products::{PgProductsService, ProductsService},
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),
}

#[derive(Clone)]
pub struct AppContext {
    pub products: Arc<dyn ProductsService>,
    pub auth: Arc<dyn AuthValidator>,
}

impl AppContext {
    /// Build application context from database pool settings and auth service settings.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection fails.
    pub async fn from_config(
        url: &str,
        max_connections: u32,
        auth: AuthServiceConfig,
    ) -> Result<Self, AppInitError> {
        let pool = database::connect_pool(url, max_connections)
            .await
            .map_err(AppInitError::Database)?;

        let db = Db::new(pool);

        Ok(Self {
            products: Arc::new(PgProductsService::new(db)),
            auth: Arc::new(HttpAuthValidator::new(auth)),
        })
    }
}
