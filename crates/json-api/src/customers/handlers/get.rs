//! Get Customer Handler

use salvo::{oapi::extract::PathParam, prelude::*};

use customers_app::domain::customers::records::CustomerId;

use crate::{
    customers::{errors::into_status_error, models::CustomerResponse},
    extensions::*,
};

/// Get Customer Handler
///
/// Returns a customer.
#[endpoint(
    tags("customers"),
    summary = "Get Customer",
    security(("basic_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Customer found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid customer id"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Unauthorized"),
        (status_code = StatusCode::NOT_FOUND, description = "Customer not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<CustomerId>,
    depot: &mut Depot,
) -> Result<Json<CustomerResponse>, StatusError> {
    let state = depot.state()?;

    let customer = state
        .app
        .customers
        .get_customer(id.into_inner())
        .await
        .map_err(into_status_error)?;

    Ok(Json(customer.into()))
}
