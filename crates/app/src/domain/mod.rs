//! Customer Domain Concerns

pub mod customers;
pub mod health;
