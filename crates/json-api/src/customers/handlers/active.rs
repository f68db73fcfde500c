//! List Active Customers Handler

use salvo::prelude::*;

use crate::{
    customers::{errors::into_status_error, models::CustomerResponse},
    extensions::*,
};

/// List Active Customers Handler
#[endpoint(
    tags("customers"),
    summary = "List Active Customers",
    security(("basic_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Customers that are not blocked"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Unauthorized"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<CustomerResponse>>, StatusError> {
    let state = depot.state()?;

    let customers = state
        .app
        .customers
        .list_active_customers()
        .await
        .map_err(into_status_error)?;

    Ok(Json(customers.into_iter().map(Into::into).collect()))
}
