//! Products Repository

use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as, query_scalar};

use crate::domain::products::{
    data::{NewProduct, ProductUpdate},
    records::{ProductId, ProductRecord},
};

const LIST_PRODUCTS_SQL: &str = include_str!("sql/list_products.sql");
const GET_PRODUCT_SQL: &str = include_str!("sql/get_product.sql");
const PRODUCT_EXISTS_SQL: &str = include_str!("sql/product_exists.sql");
const CREATE_PRODUCT_SQL: &str = include_str!("sql/create_product.sql");
const UPDATE_PRODUCT_SQL: &str = include_str!("sql/update_product.sql");
const DELETE_PRODUCT_SQL: &str = include_str!("sql/delete_product.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgProductsRepository;

impl PgProductsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_products(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<ProductRecord>, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(LIST_PRODUCTS_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn get_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductId,
    ) -> Result<ProductRecord, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(GET_PRODUCT_SQL)
            .bind(product.into_i32())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn product_exists(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductId,
    ) -> Result<bool, sqlx::Error> {
        query_scalar::<Postgres, bool>(PRODUCT_EXISTS_SQL)
            .bind(product.into_i32())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn create_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: NewProduct,
    ) -> Result<ProductRecord, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(CREATE_PRODUCT_SQL)
            .bind(product.name)
            .bind(product.kind)
            .fetch_one(&mut **tx)
            .await
    }

    /// Returns `None` when no row carries the given id.
    pub(crate) async fn update_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductId,
        update: ProductUpdate,
    ) -> Result<Option<ProductRecord>, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(UPDATE_PRODUCT_SQL)
            .bind(product.into_i32())
            .bind(update.name)
            .bind(update.kind)
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn delete_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductId,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_PRODUCT_SQL)
            .bind(product.into_i32())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for ProductRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: ProductId::from_i32(row.try_get("id")?),
            name: row.try_get("name")?,
            kind: row.try_get("type")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::test::{TestContext, helpers::create_product};

    use super::*;

    #[tokio::test]
    async fn update_product_unknown_id_returns_none() -> TestResult {
        let ctx = TestContext::new().await;
        let repository = PgProductsRepository::new();
        let mut tx = ctx.db.begin_test_transaction().await;

        let updated = repository
            .update_product(
                &mut tx,
                ProductId::from_i32(999),
                ProductUpdate {
                    name: "Socks".to_string(),
                    kind: 5,
                },
            )
            .await?;

        assert_eq!(updated, None);

        Ok(())
    }

    #[tokio::test]
    async fn uncommitted_update_is_rolled_back() -> TestResult {
        let ctx = TestContext::new().await;
        let repository = PgProductsRepository::new();
        let existing = create_product(&ctx, "Shoes", 1).await?;

        {
            let mut tx = ctx.db.begin_test_transaction().await;

            assert!(repository.product_exists(&mut tx, existing.id).await?);

            let updated = repository
                .update_product(
                    &mut tx,
                    existing.id,
                    ProductUpdate {
                        name: "Socks".to_string(),
                        kind: 5,
                    },
                )
                .await?;

            assert_eq!(updated.map(|record| record.name), Some("Socks".to_string()));
        }

        let mut tx = ctx.db.begin_test_transaction().await;

        assert_eq!(repository.get_product(&mut tx, existing.id).await?, existing);

        Ok(())
    }
}
