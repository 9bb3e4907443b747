//! Auth validator.

use async_trait::async_trait;
use mockall::automock;
use tracing::warn;

use crate::auth::{AuthServiceClient, AuthServiceConfig, AuthValidationError, TokenStatus};

/// Validates access tokens by asking the auth service, once per call.
#[derive(Debug, Clone)]
pub struct HttpAuthValidator {
    client: AuthServiceClient,
}

impl HttpAuthValidator {
    #[must_use]
    pub fn new(config: AuthServiceConfig) -> Self {
        Self {
            client: AuthServiceClient::new(config),
        }
    }
}

#[async_trait]
impl AuthValidator for HttpAuthValidator {
    async fn validate(&self, access_token: &str) -> Result<(), AuthValidationError> {
        match self.client.validate(access_token).await {
            Ok(TokenStatus::Valid) => Ok(()),
            Ok(TokenStatus::Invalid) => Err(AuthValidationError::InvalidToken),
            Ok(TokenStatus::Forbidden) => Err(AuthValidationError::Forbidden),
            Err(source) => {
                warn!("auth service call failed: {source}");

                Err(AuthValidationError::Unavailable(source))
            }
        }
    }
}

#[automock]
#[async_trait]
pub trait AuthValidator: Send + Sync {
    /// Checks `access_token` with the auth service.
    async fn validate(&self, access_token: &str) -> Result<(), AuthValidationError>;
}
