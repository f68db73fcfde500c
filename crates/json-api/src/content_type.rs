//! Content-Type guard for JSON bodies.

use salvo::{http::header::CONTENT_TYPE, prelude::*};

/// Rejects requests whose media type is not `application/json` with 400.
#[salvo::handler]
pub(crate) async fn require_json(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let is_json = req
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(is_json_media_type);

    if !is_json {
        res.render(StatusError::bad_request().brief("Content-Type must be application/json"));
        ctrl.skip_rest();

        return;
    }

    ctrl.call_next(req, depot, res).await;
}

fn is_json_media_type(value: &str) -> bool {
    value
        .split(';')
        .next()
        .is_some_and(|media_type| media_type.trim().eq_ignore_ascii_case("application/json"))
}
