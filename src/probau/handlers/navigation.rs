use axum::{
    extract::{Extension, Query},
    http::HeaderMap,
    response::{IntoResponse, Json},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::{IntoParams, ToSchema};

use super::auth::{session::current_session, AuthState};
use crate::guard::{localized_menu, Locale, MenuEntry};

#[derive(Deserialize, IntoParams, Debug)]
#[into_params(parameter_in = Query)]
pub struct NavigationQuery {
    /// `de`, `fr`, `it` or `en`; unknown values fall back to the default locale.
    pub locale: Option<String>,
}

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct NavigationResponse {
    pub ok: bool,
    pub locale: Locale,
    pub items: Vec<MenuEntry>,
}

#[utoipa::path(
    get,
    path = "/api/navigation",
    params(NavigationQuery),
    responses(
        (status = 200, description = "Menu for the current session's role, empty without a session", body = NavigationResponse)
    ),
    tag = "navigation"
)]
pub async fn navigation(
    headers: HeaderMap,
    query: Query<NavigationQuery>,
    auth_state: Extension<Arc<AuthState>>,
) -> impl IntoResponse {
    let locale = query
        .locale
        .as_deref()
        .and_then(Locale::parse)
        .unwrap_or_else(|| auth_state.config().default_locale());

    let items = current_session(&headers)
        .map(|session| localized_menu(session.role, locale))
        .unwrap_or_default();

    Json(NavigationResponse {
        ok: true,
        locale,
        items,
    })
}
