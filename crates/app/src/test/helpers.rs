//! Test Helpers

use crate::{
    domain::customers::{
        CustomersService, CustomersServiceError, data::CustomerUpsert, records::CustomerRecord,
    },
    test::TestContext,
};

pub(crate) async fn create_customer(
    ctx: &TestContext,
    name: &str,
    phone: &str,
) -> Result<CustomerRecord, CustomersServiceError> {
    ctx.customers
        .save_customer(CustomerUpsert {
            id: 0,
            name: name.to_string(),
            phone: phone.to_string(),
        })
        .await
}
