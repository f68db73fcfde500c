//! Authentication

mod credentials;

pub use credentials::*;
