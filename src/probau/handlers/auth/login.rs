//! Login and registration: validate the payload, build the session and set the cookie.
//!
//! Both endpoints shape the session the same way; identity verification itself
//! happens in the upstream auth provider before the browser calls us.

use axum::{
    extract::Extension,
    http::{header::SET_COOKIE, HeaderMap, StatusCode},
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;
use tracing::{debug, error, info, instrument};

use super::{
    session::session_cookie,
    state::AuthState,
    types::{ErrorResponse, LoginRequest, LoginResponse},
};

const INVALID_PAYLOAD_MESSAGE: &str = "Invalid login data";

#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Session established, cookie set", body = LoginResponse),
        (status = 400, description = "Payload failed validation", body = ErrorResponse)
    ),
    tag = "auth"
)]
#[instrument(skip_all)]
pub async fn login(
    auth_state: Extension<Arc<AuthState>>,
    payload: Option<Json<LoginRequest>>,
) -> Response {
    establish_session(&auth_state, payload)
}

#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Account session established, cookie set", body = LoginResponse),
        (status = 400, description = "Payload failed validation", body = ErrorResponse)
    ),
    tag = "auth"
)]
#[instrument(skip_all)]
pub async fn register(
    auth_state: Extension<Arc<AuthState>>,
    payload: Option<Json<LoginRequest>>,
) -> Response {
    establish_session(&auth_state, payload)
}

fn establish_session(auth_state: &AuthState, payload: Option<Json<LoginRequest>>) -> Response {
    let Some(Json(request)) = payload else {
        debug!("Login payload missing or not valid JSON");
        return invalid_payload();
    };

    let credentials = match request.validate() {
        Ok(credentials) => credentials,
        Err(field) => {
            debug!("Login payload rejected: invalid {field}");
            return invalid_payload();
        }
    };

    let session = credentials.into_session(auth_state.accounts());

    let mut headers = HeaderMap::new();
    match session_cookie(auth_state.config(), &session) {
        Ok(cookie) => {
            headers.insert(SET_COOKIE, cookie);
        }
        Err(err) => {
            error!("Failed to build session cookie: {err}");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    }

    info!(
        session.id = %session.id,
        session.role = session.role.as_str(),
        "Session established"
    );

    (
        StatusCode::OK,
        headers,
        Json(LoginResponse { ok: true, session }),
    )
        .into_response()
}

fn invalid_payload() -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::new(INVALID_PAYLOAD_MESSAGE)),
    )
        .into_response()
}
