//! Customer Models

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use customers_app::domain::customers::{
    data::CustomerUpsert,
    records::{CustomerId, CustomerRecord},
};

/// Customer Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CustomerResponse {
    /// Store-assigned identifier
    pub id: CustomerId,

    pub name: String,

    pub phone: String,

    /// `false` once the customer has been blocked
    pub active: bool,

    /// The date and time the customer was created (RFC 3339)
    pub created: String,
}

impl From<CustomerRecord> for CustomerResponse {
    fn from(customer: CustomerRecord) -> Self {
        CustomerResponse {
            id: customer.id,
            name: customer.name,
            phone: customer.phone,
            active: customer.active,
            created: customer.created.to_string(),
        }
    }
}

/// Save Customer Request
///
/// An `id` of zero, or none at all, creates a new customer. Any other id
/// updates that customer's name and phone.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub(crate) struct SaveCustomerRequest {
    pub id: CustomerId,
    pub name: String,
    pub phone: String,
}

impl From<SaveCustomerRequest> for CustomerUpsert {
    fn from(request: SaveCustomerRequest) -> Self {
        CustomerUpsert {
            id: request.id,
            name: request.name,
            phone: request.phone,
        }
    }
}
