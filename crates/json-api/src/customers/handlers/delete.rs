//! Delete Customer Handler

use salvo::{oapi::extract::PathParam, prelude::*};

use customers_app::domain::customers::records::CustomerId;

use crate::{customers::errors::into_status_error, extensions::*};

/// Delete Customer Handler
#[endpoint(
    tags("customers"),
    summary = "Delete Customer",
    security(("basic_auth" = [])),
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Customer deleted"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid customer id"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Unauthorized"),
        (status_code = StatusCode::NOT_FOUND, description = "Nothing was deleted"),
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
        .delete_customer(id.into_inner())
        .await
        .map_err(into_status_error)?;

    Ok(StatusCode::NO_CONTENT)
}
