//! Test helpers.

use std::{collections::BTreeMap, sync::Arc};

use async_trait::async_trait;
use jiff::Timestamp;
use salvo::{affix_state::inject, prelude::*};
use tokio::sync::Mutex;

use customers_app::{
    auth::CredentialsVerifier,
    context::AppContext,
    domain::{
        customers::{
            CustomersService, CustomersServiceError, MockCustomersService,
            data::CustomerUpsert,
            records::{CustomerId, CustomerRecord},
        },
        health::MockHealthService,
    },
};

use crate::state::State;

pub(crate) fn make_customer(id: CustomerId, name: &str, active: bool) -> CustomerRecord {
    CustomerRecord {
        id,
        name: name.to_owned(),
        phone: "555-0100".to_owned(),
        active,
        created: Timestamp::UNIX_EPOCH,
    }
}

fn strict_customers_mock() -> MockCustomersService {
    let mut customers = MockCustomersService::new();

    customers.expect_list_customers().never();
    customers.expect_list_active_customers().never();
    customers.expect_get_customer().never();
    customers.expect_save_customer().never();
    customers.expect_delete_customer().never();
    customers.expect_set_customer_active().never();

    customers
}

fn strict_health_mock() -> MockHealthService {
    let mut health = MockHealthService::new();

    health.expect_check().never();

    health
}

fn app_context(customers: Arc<dyn CustomersService>, health: MockHealthService) -> AppContext {
    AppContext {
        customers,
        health: Arc::new(health),
    }
}

pub(crate) fn state_with_customers(customers: Arc<dyn CustomersService>) -> Arc<State> {
    State::shared(app_context(customers, strict_health_mock()), None)
}

pub(crate) fn state_with_health(health: MockHealthService) -> Arc<State> {
    State::shared(
        app_context(Arc::new(strict_customers_mock()), health),
        None,
    )
}

pub(crate) fn state_with_credentials(
    credentials: Option<Arc<dyn CredentialsVerifier>>,
) -> Arc<State> {
    State::shared(
        app_context(Arc::new(strict_customers_mock()), strict_health_mock()),
        credentials,
    )
}

pub(crate) fn customers_service(customers: MockCustomersService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_customers(Arc::new(customers))))
            .push(route),
    )
}

/// Table-free stand-in for the Postgres store, for multi-request scenarios.
#[derive(Debug, Default)]
pub(crate) struct InMemoryCustomers {
    rows: Mutex<BTreeMap<CustomerId, CustomerRecord>>,
}

impl InMemoryCustomers {
    pub(crate) async fn seed(&self, customer: CustomerRecord) {
        self.rows.lock().await.insert(customer.id, customer);
    }
}

#[async_trait]
impl CustomersService for InMemoryCustomers {
    async fn list_customers(&self) -> Result<Vec<CustomerRecord>, CustomersServiceError> {
        Ok(self.rows.lock().await.values().cloned().collect())
    }

    async fn list_active_customers(&self) -> Result<Vec<CustomerRecord>, CustomersServiceError> {
        Ok(self
            .rows
            .lock()
            .await
            .values()
            .filter(|customer| customer.active)
            .cloned()
            .collect())
    }

    async fn get_customer(&self, id: CustomerId) -> Result<CustomerRecord, CustomersServiceError> {
        self.rows
            .lock()
            .await
            .get(&id)
            .cloned()
            .ok_or(CustomersServiceError::NotFound)
    }

    async fn save_customer(
        &self,
        customer: CustomerUpsert,
    ) -> Result<CustomerRecord, CustomersServiceError> {
        let mut rows = self.rows.lock().await;

        if customer.is_new() {
            let id = rows.keys().next_back().map_or(1, |last| last + 1);
            let record = CustomerRecord {
                id,
                name: customer.name,
                phone: customer.phone,
                active: true,
                created: Timestamp::now(),
            };

            rows.insert(id, record.clone());

            return Ok(record);
        }

        let existing = rows
            .get_mut(&customer.id)
            .ok_or(CustomersServiceError::NotFound)?;

        existing.name = customer.name;
        existing.phone = customer.phone;

        Ok(existing.clone())
    }

    async fn delete_customer(&self, id: CustomerId) -> Result<(), CustomersServiceError> {
        self.rows
            .lock()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or(CustomersServiceError::NotDeleted)
    }

    async fn set_customer_active(
        &self,
        id: CustomerId,
        active: bool,
    ) -> Result<(), CustomersServiceError> {
        let mut rows = self.rows.lock().await;

        let customer = rows.get_mut(&id).ok_or(CustomersServiceError::NotFound)?;

        customer.active = active;

        Ok(())
    }
}
