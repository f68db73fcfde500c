//! Auth

pub(crate) mod middleware;
