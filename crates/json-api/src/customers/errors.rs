//! Customer Errors

use salvo::http::StatusError;

use customers_app::domain::customers::CustomersServiceError;

pub(crate) fn into_status_error(error: CustomersServiceError) -> StatusError {
    match error {
        CustomersServiceError::NotFound => StatusError::not_found().brief("Customer not found"),
        CustomersServiceError::NotDeleted => {
            StatusError::not_found().brief("Customer not deleted")
        }
        // Already logged where it happened.
        CustomersServiceError::Internal => StatusError::internal_server_error(),
    }
}
