//! Basic auth middleware.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use salvo::{
    http::header::{AUTHORIZATION, WWW_AUTHENTICATE},
    prelude::*,
};
use tracing::warn;
use zeroize::Zeroizing;

use crate::extensions::*;

#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let state = match depot.state() {
        Ok(state) => state.clone(),
        Err(error) => {
            res.render(error);
            ctrl.skip_rest();

            return;
        }
    };

    let Some(verifier) = state.credentials.as_ref() else {
        ctrl.call_next(req, depot, res).await;

        return;
    };

    let Some((login, password)) = extract_basic_credentials(req) else {
        reject(res, ctrl, "Missing or invalid Authorization header");

        return;
    };

    if !verifier.verify(&login, &password).await {
        reject(res, ctrl, "Invalid credentials");

        return;
    }

    ctrl.call_next(req, depot, res).await;
}

fn reject(res: &mut Response, ctrl: &mut FlowCtrl, brief: &str) {
    if let Err(source) = res.add_header(WWW_AUTHENTICATE, r#"Basic realm="customers""#, true) {
        warn!("failed to set www-authenticate header: {source}");
    }

    res.render(StatusError::unauthorized().brief(brief));
    ctrl.skip_rest();
}

fn extract_basic_credentials(req: &Request) -> Option<(String, Zeroizing<String>)> {
    let value = req.headers().get(AUTHORIZATION)?.to_str().ok()?;
    let mut parts = value.splitn(2, ' ');

    let scheme = parts.next()?;
    let encoded = parts.next()?.trim();

    if !scheme.eq_ignore_ascii_case("basic") || encoded.is_empty() {
        return None;
    }

    let decoded = Zeroizing::new(String::from_utf8(STANDARD.decode(encoded).ok()?).ok()?);
    let (login, password) = decoded.split_once(':')?;

    Some((login.to_owned(), Zeroizing::new(password.to_owned())))
}
