//! Customers service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::customers::{
        data::CustomerUpsert,
        errors::CustomersServiceError,
        records::{CustomerId, CustomerRecord},
        repository::PgCustomersRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgCustomersService {
    db: Db,
    repository: PgCustomersRepository,
}

impl PgCustomersService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgCustomersRepository::new(),
        }
    }
}

#[async_trait]
impl CustomersService for PgCustomersService {
    async fn list_customers(&self) -> Result<Vec<CustomerRecord>, CustomersServiceError> {
        let mut conn = self.db.acquire().await?;

        Ok(self.repository.list_customers(&mut conn).await?)
    }

    async fn list_active_customers(&self) -> Result<Vec<CustomerRecord>, CustomersServiceError> {
        let mut conn = self.db.acquire().await?;

        let customers = self.repository.list_active_customers(&mut conn).await?;

        // The query already filters on the flag; rows are re-checked anyway.
        Ok(customers
            .into_iter()
            .filter(|customer| customer.active)
            .collect())
    }

    async fn get_customer(&self, id: CustomerId) -> Result<CustomerRecord, CustomersServiceError> {
        let mut conn = self.db.acquire().await?;

        Ok(self.repository.get_customer(&mut conn, id).await?)
    }

    async fn save_customer(
        &self,
        customer: CustomerUpsert,
    ) -> Result<CustomerRecord, CustomersServiceError> {
        let mut conn = self.db.acquire().await?;

        let saved = if customer.is_new() {
            self.repository
                .create_customer(&mut conn, &customer.name, &customer.phone)
                .await?
        } else {
            self.repository
                .update_customer(&mut conn, customer.id, &customer.name, &customer.phone)
                .await?
        };

        Ok(saved)
    }

    async fn delete_customer(&self, id: CustomerId) -> Result<(), CustomersServiceError> {
        let mut conn = self.db.acquire().await?;

        let rows_affected = self.repository.delete_customer(&mut conn, id).await?;

        if rows_affected == 0 {
            return Err(CustomersServiceError::NotDeleted);
        }

        Ok(())
    }

    async fn set_customer_active(
        &self,
        id: CustomerId,
        active: bool,
    ) -> Result<(), CustomersServiceError> {
        let mut tx = self.db.begin().await?;

        let customer = self.repository.lock_customer(&mut tx, id).await?;

        if customer.active != active {
            self.repository
                .set_customer_active(&mut tx, id, active)
                .await?;
        }

        tx.commit().await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait CustomersService: Send + Sync {
    /// Retrieves every customer.
    async fn list_customers(&self) -> Result<Vec<CustomerRecord>, CustomersServiceError>;

    /// Retrieves customers that are not blocked.
    async fn list_active_customers(&self) -> Result<Vec<CustomerRecord>, CustomersServiceError>;

    /// Retrieve a single customer.
    async fn get_customer(&self, id: CustomerId) -> Result<CustomerRecord, CustomersServiceError>;

    /// Inserts a customer when the id is zero, otherwise updates it.
    async fn save_customer(
        &self,
        customer: CustomerUpsert,
    ) -> Result<CustomerRecord, CustomersServiceError>;

    /// Permanently deletes a customer.
    async fn delete_customer(&self, id: CustomerId) -> Result<(), CustomersServiceError>;

    /// Blocks (`false`) or unblocks (`true`) a customer. A no-op when the
    /// customer is already in the requested state.
    async fn set_customer_active(
        &self,
        id: CustomerId,
        active: bool,
    ) -> Result<(), CustomersServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::test::{TestContext, helpers::create_customer};

    use super::*;

    async fn count_rows(ctx: &TestContext) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM customers")
            .fetch_one(ctx.db.pool())
            .await
    }

    /// Id of the transaction that last wrote the row.
    async fn row_version(ctx: &TestContext, id: CustomerId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT xmin::text::bigint FROM customers WHERE id = $1")
            .bind(id)
            .fetch_one(ctx.db.pool())
            .await
    }

    #[tokio::test]
    async fn save_customer_with_zero_id_returns_generated_id() -> TestResult {
        let ctx = TestContext::new().await;

        let customer = create_customer(&ctx, "Alice", "123").await?;

        assert_ne!(customer.id, 0, "expected a generated id");
        assert_eq!(customer.name, "Alice");
        assert_eq!(customer.phone, "123");
        assert!(customer.active, "new customers start active");

        Ok(())
    }

    #[tokio::test]
    async fn save_customer_with_zero_id_always_creates_distinct_rows() -> TestResult {
        let ctx = TestContext::new().await;

        let first = create_customer(&ctx, "Alice", "123").await?;
        let second = create_customer(&ctx, "Alice", "123").await?;

        assert_ne!(first.id, second.id);
        assert_eq!(count_rows(&ctx).await?, 2);

        Ok(())
    }

    #[tokio::test]
    async fn save_customer_with_existing_id_updates_in_place() -> TestResult {
        let ctx = TestContext::new().await;

        let created = create_customer(&ctx, "Alice", "123").await?;
        let before = count_rows(&ctx).await?;

        let updated = ctx
            .customers
            .save_customer(CustomerUpsert {
                id: created.id,
                name: "Alicia".to_string(),
                phone: "456".to_string(),
            })
            .await?;

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "Alicia");
        assert_eq!(updated.phone, "456");
        assert_eq!(updated.created, created.created);
        assert_eq!(count_rows(&ctx).await?, before);

        Ok(())
    }

    #[tokio::test]
    async fn save_customer_with_unknown_id_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx
            .customers
            .save_customer(CustomerUpsert {
                id: 999,
                name: "Nobody".to_string(),
                phone: "000".to_string(),
            })
            .await;

        assert_eq!(result, Err(CustomersServiceError::NotFound));
    }

    #[tokio::test]
    async fn get_customer_returns_stored_record() -> TestResult {
        let ctx = TestContext::new().await;

        let created = create_customer(&ctx, "Bob", "555").await?;

        let fetched = ctx.customers.get_customer(created.id).await?;

        assert_eq!(fetched, created);

        Ok(())
    }

    #[tokio::test]
    async fn get_customer_unknown_id_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx.customers.get_customer(999).await;

        assert_eq!(result, Err(CustomersServiceError::NotFound));
    }

    #[tokio::test]
    async fn list_customers_returns_all_rows_in_id_order() -> TestResult {
        let ctx = TestContext::new().await;

        let a = create_customer(&ctx, "A", "1").await?;
        let b = create_customer(&ctx, "B", "2").await?;

        ctx.customers.set_customer_active(b.id, false).await?;

        let ids: Vec<CustomerId> = ctx
            .customers
            .list_customers()
            .await?
            .iter()
            .map(|customer| customer.id)
            .collect();

        assert_eq!(ids, vec![a.id, b.id]);

        Ok(())
    }

    #[tokio::test]
    async fn list_customers_empty_when_none_created() -> TestResult {
        let ctx = TestContext::new().await;

        assert!(ctx.customers.list_customers().await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn list_active_customers_excludes_blocked() -> TestResult {
        let ctx = TestContext::new().await;

        let kept = create_customer(&ctx, "Kept", "1").await?;
        let blocked = create_customer(&ctx, "Blocked", "2").await?;

        ctx.customers.set_customer_active(blocked.id, false).await?;

        let active = ctx.customers.list_active_customers().await?;

        assert!(
            active.iter().all(|customer| customer.active),
            "inactive customer returned"
        );
        assert!(active.iter().any(|customer| customer.id == kept.id));
        assert!(!active.iter().any(|customer| customer.id == blocked.id));

        Ok(())
    }

    #[tokio::test]
    async fn delete_customer_removes_row() -> TestResult {
        let ctx = TestContext::new().await;

        let customer = create_customer(&ctx, "Gone", "0").await?;

        ctx.customers.delete_customer(customer.id).await?;

        let result = ctx.customers.get_customer(customer.id).await;

        assert_eq!(result, Err(CustomersServiceError::NotFound));
        assert_eq!(count_rows(&ctx).await?, 0);

        Ok(())
    }

    #[tokio::test]
    async fn delete_customer_unknown_id_returns_not_deleted() {
        let ctx = TestContext::new().await;

        let result = ctx.customers.delete_customer(999).await;

        assert_eq!(result, Err(CustomersServiceError::NotDeleted));
    }

    #[tokio::test]
    async fn blocking_twice_is_idempotent() -> TestResult {
        let ctx = TestContext::new().await;

        let customer = create_customer(&ctx, "Carol", "789").await?;

        ctx.customers.set_customer_active(customer.id, false).await?;

        let version_after_first = row_version(&ctx, customer.id).await?;

        ctx.customers.set_customer_active(customer.id, false).await?;

        let fetched = ctx.customers.get_customer(customer.id).await?;

        assert!(!fetched.active, "customer should stay blocked");
        assert_eq!(
            row_version(&ctx, customer.id).await?,
            version_after_first,
            "second block should not rewrite the row"
        );

        Ok(())
    }

    #[tokio::test]
    async fn blocking_an_active_customer_writes_the_row() -> TestResult {
        let ctx = TestContext::new().await;

        let customer = create_customer(&ctx, "Erin", "654").await?;
        let version_before = row_version(&ctx, customer.id).await?;

        ctx.customers.set_customer_active(customer.id, false).await?;

        assert_ne!(
            row_version(&ctx, customer.id).await?,
            version_before,
            "state change should rewrite the row"
        );

        Ok(())
    }

    #[tokio::test]
    async fn unblocking_restores_active_flag() -> TestResult {
        let ctx = TestContext::new().await;

        let customer = create_customer(&ctx, "Dave", "321").await?;

        ctx.customers.set_customer_active(customer.id, false).await?;
        ctx.customers.set_customer_active(customer.id, true).await?;

        assert!(ctx.customers.get_customer(customer.id).await?.active);

        Ok(())
    }

    #[tokio::test]
    async fn set_customer_active_unknown_id_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx.customers.set_customer_active(999, false).await;

        assert_eq!(result, Err(CustomersServiceError::NotFound));
    }
}
