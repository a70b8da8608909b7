//! Session cookie endpoints and helpers.

use axum::{
    extract::Extension,
    http::{
        header::{InvalidHeaderValue, COOKIE, SET_COOKIE},
        HeaderMap, HeaderValue, StatusCode,
    },
    response::{IntoResponse, Json},
};
use std::sync::Arc;
use tracing::error;

use super::{
    state::{AuthState, SessionConfig},
    types::{OkResponse, SessionResponse},
};
use crate::session::{self, Session, SESSION_COOKIE_NAME};

#[utoipa::path(
    get,
    path = "/api/auth/session",
    responses(
        (status = 200, description = "Current session, null when absent or invalid", body = SessionResponse)
    ),
    tag = "auth"
)]
pub async fn session(headers: HeaderMap) -> impl IntoResponse {
    Json(SessionResponse {
        ok: true,
        session: current_session(&headers),
    })
}

#[utoipa::path(
    post,
    path = "/api/auth/logout",
    responses(
        (status = 200, description = "Session cookie cleared", body = OkResponse)
    ),
    tag = "auth"
)]
pub async fn logout(auth_state: Extension<Arc<AuthState>>) -> impl IntoResponse {
    let mut headers = HeaderMap::new();
    match clear_session_cookie(auth_state.config()) {
        Ok(cookie) => {
            headers.insert(SET_COOKIE, cookie);
        }
        Err(err) => error!("Failed to build logout cookie: {err}"),
    }
    (StatusCode::OK, headers, Json(OkResponse { ok: true }))
}

/// Decode the session cookie from request headers, if any.
pub(crate) fn current_session(headers: &HeaderMap) -> Option<Session> {
    session::deserialize(extract_session_cookie(headers).as_deref())
}

/// `Set-Cookie` value carrying a serialized session.
pub(crate) fn session_cookie(
    config: &SessionConfig,
    session: &Session,
) -> Result<HeaderValue, InvalidHeaderValue> {
    let value = session::serialize(session);
    let max_age = config.max_age_seconds();
    let mut cookie = format!(
        "{SESSION_COOKIE_NAME}={value}; Path=/; HttpOnly; SameSite=Lax; Max-Age={max_age}"
    );
    if config.cookie_secure() {
        cookie.push_str("; Secure");
    }
    HeaderValue::from_str(&cookie)
}

/// Empty, already expired cookie under the same name.
pub(crate) fn clear_session_cookie(
    config: &SessionConfig,
) -> Result<HeaderValue, InvalidHeaderValue> {
    let mut cookie = format!(
        "{SESSION_COOKIE_NAME}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0; Expires=Thu, 01 Jan 1970 00:00:00 GMT"
    );
    if config.cookie_secure() {
        cookie.push_str("; Secure");
    }
    HeaderValue::from_str(&cookie)
}

fn extract_session_cookie(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|header| header.to_str().ok())
        .flat_map(|value| value.split(';'))
        .find_map(|pair| {
            let (key, value) = pair.trim().split_once('=')?;
            (key.trim() == SESSION_COOKIE_NAME).then(|| value.trim().to_string())
        })
}
