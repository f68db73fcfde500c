//! Service-level test harness backed by a throwaway Postgres container.

pub(crate) mod helpers;

pub(crate) use context::TestContext;
