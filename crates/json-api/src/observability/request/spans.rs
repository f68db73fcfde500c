//! Route labels for spans and metrics.

const UNMATCHED_ROUTE: &str = "unmatched";

/// Maps a request path onto the route template that serves it.
///
/// Labels come from a fixed set so client-chosen paths cannot mint new
/// metric series. Anything outside the route tree is `unmatched`.
pub(super) fn route_label(path: &str) -> &'static str {
    let segments: Vec<&str> = path
        .split('/')
        .filter(|segment| !segment.is_empty())
        .collect();

    match segments.as_slice() {
        [] => "/",
        ["healthcheck"] => "/healthcheck",
        ["metrics"] => "/metrics",
        ["api-doc", "openapi.json"] => "/api-doc/openapi.json",
        ["docs", ..] => "/docs",
        ["customers"] => "/customers",
        ["customers", "active"] => "/customers/active",
        ["customers", _] => "/customers/{id}",
        ["customers", _, "block"] => "/customers/{id}/block",
        _ => UNMATCHED_ROUTE,
    }
}
