//! Customer Records

use jiff::Timestamp;

/// Customer identifier assigned by the database.
pub type CustomerId = i64;

/// Customer Record
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerRecord {
    /// Database assigned identifier.
    pub id: CustomerId,

    /// Display name.
    pub name: String,

    /// Contact phone number.
    pub phone: String,

    /// Whether the customer is unblocked.
    pub active: bool,

    /// Creation timestamp.
    pub created: Timestamp,
}
