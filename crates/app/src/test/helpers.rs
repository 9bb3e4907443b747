//! Test Helpers

use crate::{
    domain::products::{
        ProductsService, ProductsServiceError, data::NewProduct, records::ProductRecord,
    },
    test::TestContext,
};

pub(crate) async fn create_product(
    ctx: &TestContext,
    name: &str,
    kind: i32,
) -> Result<ProductRecord, ProductsServiceError> {
    ctx.products
        .create_product(NewProduct {
            name: name.to_string(),
            kind,
        })
        .await
}
