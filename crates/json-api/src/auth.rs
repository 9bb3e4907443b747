//! Access token gate.

use salvo::Request;
use tracing::{Span, debug, error, field};

use eshop_product_app::auth::{ACCESS_TOKEN_HEADER, AuthValidationError};

use crate::{observability, products::errors::ProductApiError, state::State};

/// How an access token check ended, as recorded in spans and metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AuthOutcome {
    Missing,
    Valid,
    Invalid,
    Forbidden,
    Unavailable,
}

impl AuthOutcome {
    fn as_str(self) -> &'static str {
        match self {
            Self::Missing => "missing",
            Self::Valid => "valid",
            Self::Invalid => "invalid",
            Self::Forbidden => "forbidden",
            Self::Unavailable => "unavailable",
        }
    }

    fn of(result: &Result<(), AuthValidationError>) -> Self {
        match result {
            Ok(()) => Self::Valid,
            Err(AuthValidationError::InvalidToken) => Self::Invalid,
            Err(AuthValidationError::Forbidden) => Self::Forbidden,
            Err(AuthValidationError::Unavailable(_)) => Self::Unavailable,
        }
    }
}

/// Read the access token header and have the auth service validate it.
///
/// A missing or blank header is rejected without calling the auth service.
#[tracing::instrument(name = "auth.check", skip_all, fields(auth.outcome = field::Empty))]
pub(crate) async fn authorize(req: &Request, state: &State) -> Result<(), ProductApiError> {
    let Some(token) = access_token(req) else {
        debug!("request carried no access token");
        record(AuthOutcome::Missing);

        return Err(ProductApiError::Unauthorized);
    };

    let result = state.app.auth.validate(token).await;

    record(AuthOutcome::of(&result));

    result.map_err(|error| match error {
        AuthValidationError::InvalidToken => ProductApiError::Unauthorized,
        AuthValidationError::Forbidden => ProductApiError::Forbidden,
        AuthValidationError::Unavailable(source) => {
            error!("auth service unavailable: {source}");

            ProductApiError::AuthServiceUnavailable
        }
    })
}

fn record(outcome: AuthOutcome) {
    Span::current().record("auth.outcome", outcome.as_str());
    observability::record_auth_check(outcome.as_str());
}

fn access_token(req: &Request) -> Option<&str> {
    let token = req.headers().get(ACCESS_TOKEN_HEADER)?.to_str().ok()?.trim();

    (!token.is_empty()).then_some(token)
}
