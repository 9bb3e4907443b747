//! Test helpers.

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*};

use eshop_product_app::{
    auth::{AuthValidationError, MockAuthValidator},
    context::AppContext,
    domain::products::{
        MockProductsService,
        records::{ProductId, ProductRecord},
    },
};

use crate::state::State;

pub(crate) const TEST_ACCESS_TOKEN: &str = "test-access-token";

pub(crate) fn make_product(id: i32, name: &str, kind: i32) -> ProductRecord {
    ProductRecord {
        id: ProductId::from_i32(id),
        name: name.to_owned(),
        kind,
    }
}

/// Auth mock that fails the test if the auth service is consulted at all.
pub(crate) fn strict_auth_mock() -> MockAuthValidator {
    let mut auth = MockAuthValidator::new();

    auth.expect_validate().never();

    auth
}

/// Auth mock that accepts [`TEST_ACCESS_TOKEN`] exactly once.
pub(crate) fn accepting_auth() -> MockAuthValidator {
    let mut auth = MockAuthValidator::new();

    auth.expect_validate()
        .once()
        .withf(|token: &str| token == TEST_ACCESS_TOKEN)
        .returning(|_| Ok(()));

    auth
}

/// Auth mock that answers the single expected call with `error`.
pub(crate) fn rejecting_auth(error: AuthValidationError) -> MockAuthValidator {
    let mut auth = MockAuthValidator::new();

    auth.expect_validate()
        .once()
        .withf(|token: &str| token == TEST_ACCESS_TOKEN)
        .return_once(move |_| Err(error));

    auth
}

/// Products mock that fails the test on any call.
pub(crate) fn strict_products_mock() -> MockProductsService {
    let mut products = MockProductsService::new();

    products.expect_list_products().never();
    products.expect_get_product().never();
    products.expect_create_product().never();
    products.expect_edit_product().never();
    products.expect_delete_product().never();

    products
}

pub(crate) fn products_service(
    products: MockProductsService,
    auth: MockAuthValidator,
    route: Router,
) -> Service {
    let app = AppContext {
        products: Arc::new(products),
        auth: Arc::new(auth),
    };

    Service::new(
        Router::new()
            .hoop(inject(State::from_app_context(app)))
            .push(route),
    )
}
