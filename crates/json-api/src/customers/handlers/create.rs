//! Save Customer Handler

use salvo::{oapi::extract::JsonBody, prelude::*};

use crate::{
    customers::{
        errors::into_status_error,
        models::{CustomerResponse, SaveCustomerRequest},
    },
    extensions::*,
};

/// Save Customer Handler
///
/// Creates a customer when `id` is zero or missing, otherwise updates the
/// named customer. Responds with the stored customer, including its id.
#[endpoint(
    tags("customers"),
    summary = "Save Customer",
    security(("basic_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Customer saved"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Unauthorized"),
        (status_code = StatusCode::NOT_FOUND, description = "Customer to update not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<SaveCustomerRequest>,
    depot: &mut Depot,
) -> Result<Json<CustomerResponse>, StatusError> {
    let state = depot.state()?;

    let customer = state
        .app
        .customers
        .save_customer(json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(customer.into()))
}
