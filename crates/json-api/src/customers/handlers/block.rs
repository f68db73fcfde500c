//! Block Customer Handler

use salvo::{oapi::extract::PathParam, prelude::*};

use customers_app::domain::customers::records::CustomerId;

use crate::{customers::errors::into_status_error, extensions::*};

/// Block Customer Handler
///
/// Marks the customer inactive. Blocking a blocked customer succeeds.
#[endpoint(
    tags("customers"),
    summary = "Block Customer",
    security(("basic_auth" = [])),
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Customer blocked"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid customer id"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Unauthorized"),
        (status_code = StatusCode::NOT_FOUND, description = "Customer not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<CustomerId>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.state()?;

    state
        .app
        .customers
        .set_customer_active(id.into_inner(), false)
        .await
        .map_err(into_status_error)?;

    Ok(StatusCode::NO_CONTENT)
}
