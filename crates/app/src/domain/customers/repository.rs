//! Customers Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, PgConnection, Postgres, Row, postgres::PgRow, query, query_as};

use crate::domain::customers::records::{CustomerId, CustomerRecord};

const LIST_CUSTOMERS_SQL: &str = include_str!("sql/list_customers.sql");
const LIST_ACTIVE_CUSTOMERS_SQL: &str = include_str!("sql/list_active_customers.sql");
const GET_CUSTOMER_SQL: &str = include_str!("sql/get_customer.sql");
const GET_CUSTOMER_FOR_UPDATE_SQL: &str = include_str!("sql/get_customer_for_update.sql");
const CREATE_CUSTOMER_SQL: &str = include_str!("sql/create_customer.sql");
const UPDATE_CUSTOMER_SQL: &str = include_str!("sql/update_customer.sql");
const SET_CUSTOMER_ACTIVE_SQL: &str = include_str!("sql/set_customer_active.sql");
const DELETE_CUSTOMER_SQL: &str = include_str!("sql/delete_customer.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgCustomersRepository;

impl PgCustomersRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_customers(
        &self,
        conn: &mut PgConnection,
    ) -> Result<Vec<CustomerRecord>, sqlx::Error> {
        query_as::<Postgres, CustomerRecord>(LIST_CUSTOMERS_SQL)
            .fetch_all(&mut *conn)
            .await
    }

    pub(crate) async fn list_active_customers(
        &self,
        conn: &mut PgConnection,
    ) -> Result<Vec<CustomerRecord>, sqlx::Error> {
        query_as::<Postgres, CustomerRecord>(LIST_ACTIVE_CUSTOMERS_SQL)
            .fetch_all(&mut *conn)
            .await
    }

    pub(crate) async fn get_customer(
        &self,
        conn: &mut PgConnection,
        id: CustomerId,
    ) -> Result<CustomerRecord, sqlx::Error> {
        query_as::<Postgres, CustomerRecord>(GET_CUSTOMER_SQL)
            .bind(id)
            .fetch_one(&mut *conn)
            .await
    }

    /// Reads a customer and locks the row until the surrounding transaction ends.
    pub(crate) async fn lock_customer(
        &self,
        conn: &mut PgConnection,
        id: CustomerId,
    ) -> Result<CustomerRecord, sqlx::Error> {
        query_as::<Postgres, CustomerRecord>(GET_CUSTOMER_FOR_UPDATE_SQL)
            .bind(id)
            .fetch_one(&mut *conn)
            .await
    }

    pub(crate) async fn create_customer(
        &self,
        conn: &mut PgConnection,
        name: &str,
        phone: &str,
    ) -> Result<CustomerRecord, sqlx::Error> {
        query_as::<Postgres, CustomerRecord>(CREATE_CUSTOMER_SQL)
            .bind(name)
            .bind(phone)
            .fetch_one(&mut *conn)
            .await
    }

    pub(crate) async fn update_customer(
        &self,
        conn: &mut PgConnection,
        id: CustomerId,
        name: &str,
        phone: &str,
    ) -> Result<CustomerRecord, sqlx::Error> {
        query_as::<Postgres, CustomerRecord>(UPDATE_CUSTOMER_SQL)
            .bind(id)
            .bind(name)
            .bind(phone)
            .fetch_one(&mut *conn)
            .await
    }

    pub(crate) async fn set_customer_active(
        &self,
        conn: &mut PgConnection,
        id: CustomerId,
        active: bool,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(SET_CUSTOMER_ACTIVE_SQL)
            .bind(id)
            .bind(active)
            .execute(&mut *conn)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    pub(crate) async fn delete_customer(
        &self,
        conn: &mut PgConnection,
        id: CustomerId,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_CUSTOMER_SQL)
            .bind(id)
            .execute(&mut *conn)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for CustomerRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            phone: row.try_get("phone")?,
            active: row.try_get("active")?,
            created: row.try_get::<SqlxTimestamp, _>("created")?.to_jiff(),
        })
    }
}
