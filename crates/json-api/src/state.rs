//! State

use std::sync::Arc;

use customers_app::{auth::CredentialsVerifier, context::AppContext};

#[derive(Clone)]
pub(crate) struct State {
    pub(crate) app: AppContext,

    /// `None` leaves the customer routes open.
    pub(crate) credentials: Option<Arc<dyn CredentialsVerifier>>,
}

impl State {
    #[must_use]
    pub(crate) fn new(app: AppContext, credentials: Option<Arc<dyn CredentialsVerifier>>) -> Self {
        Self { app, credentials }
    }

    #[must_use]
    pub(crate) fn shared(
        app: AppContext,
        credentials: Option<Arc<dyn CredentialsVerifier>>,
    ) -> Arc<Self> {
        Arc::new(Self::new(app, credentials))
    }
}
