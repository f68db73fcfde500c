//! Customer Data

use crate::domain::customers::records::CustomerId;

/// Customer create-or-update data.
///
/// An `id` of zero inserts a new customer, anything else updates the
/// customer with that id.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CustomerUpsert {
    pub id: CustomerId,
    pub name: String,
    pub phone: String,
}

impl CustomerUpsert {
    /// Whether this upsert creates a new row.
    #[must_use]
    pub const fn is_new(&self) -> bool {
        self.id == 0
    }
}
