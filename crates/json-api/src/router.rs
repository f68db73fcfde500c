//! App Router

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*, trailing_slash::remove_slash};

use crate::{
    auth, content_type, customers, healthcheck,
    observability::{metrics_handler, request_logging},
    state::State,
};

/// Full application router, minus the OpenAPI document routes.
pub(crate) fn app_router(state: Arc<State>) -> Router {
    Router::new()
        .hoop(request_logging)
        .hoop(CatchPanic::new())
        .hoop(remove_slash())
        .hoop(inject(state))
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(Router::with_path("metrics").get(metrics_handler))
        .push(customers_router())
}

/// `/customers` tree, guarded by Basic auth when credentials are configured.
pub(crate) fn customers_router() -> Router {
    Router::with_path("customers")
        .hoop(auth::middleware::handler)
        .get(customers::index::handler)
        .push(
            Router::new()
                .hoop(content_type::require_json)
                .post(customers::create::handler),
        )
        // Ahead of `{id}` so it is not parsed as an id.
        .push(Router::with_path("active").get(customers::active::handler))
        .push(
            Router::with_path("{id}")
                .get(customers::get::handler)
                .delete(customers::delete::handler)
                .push(
                    Router::with_path("block")
                        .post(customers::block::handler)
                        .delete(customers::unblock::handler),
                ),
        )
}
