//! Unblock Customer Handler

use salvo::{oapi::extract::PathParam, prelude::*};

use customers_app::domain::customers::records::CustomerId;

use crate::{customers::errors::into_status_error, extensions::*};

/// Unblock Customer Handler
#[endpoint(
    tags("customers"),
    summary = "Unblock Customer",
    security(("basic_auth" = [])),
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Customer unblocked"),
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
        .set_customer_active(id.into_inner(), true)
        .await
        .map_err(into_status_error)?;

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use salvo::test::TestClient;
    use testresult::TestResult;

    use customers_app::domain::customers::{CustomersServiceError, MockCustomersService};

    use crate::test_helpers::customers_service;

    use super::*;

    fn make_service(repo: MockCustomersService) -> Service {
        customers_service(
            repo,
            Router::with_path("customers/{id}/block").delete(handler),
        )
    }

    #[tokio::test]
    async fn test_unblock_customer_returns_204() -> TestResult {
        let mut repo = MockCustomersService::new();

        repo.expect_set_customer_active()
            .once()
            .withf(|id, active| *id == 5 && *active)
            .return_once(|_, _| Ok(()));

        let res = TestClient::delete("http://example.com/customers/5/block")
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NO_CONTENT));

        Ok(())
    }

    #[tokio::test]
    async fn test_unblock_storage_failure_returns_500() -> TestResult {
        let mut repo = MockCustomersService::new();

        repo.expect_set_customer_active()
            .once()
            .return_once(|_, _| Err(CustomersServiceError::Internal));

        let res = TestClient::delete("http://example.com/customers/5/block")
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));

        Ok(())
    }
}
