//! Role-gated page subtrees.
//!
//! `/{locale}/arbeitsgeber/...` requires an employer session and
//! `/{locale}/unternehmer/...` a contractor session. [`require_role`] runs before
//! any page handler; pages themselves only assemble the page model a renderer
//! would receive.

use axum::{
    extract::{Extension, Request, State},
    http::{StatusCode, Uri},
    middleware::{self, Next},
    response::{IntoResponse, Json, Redirect, Response},
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::ToSchema;

use super::auth::session::current_session;
use crate::{
    guard::{self, Access, Locale, MenuEntry},
    session::{Role, Session},
};

/// Props for a protected page.
#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct PageModel {
    /// Requested path without the locale segment.
    pub page: String,
    pub locale: Locale,
    pub session: Session,
    pub menu: Vec<MenuEntry>,
}

/// Routes for both role trees, each behind its guard.
pub fn router() -> Router {
    let employer = Router::new()
        .route("/:locale/arbeitsgeber", get(page))
        .route("/:locale/arbeitsgeber/*rest", get(page))
        .route_layer(middleware::from_fn_with_state(Role::Employer, require_role));

    let contractor = Router::new()
        .route("/:locale/unternehmer", get(page))
        .route("/:locale/unternehmer/*rest", get(page))
        .route_layer(middleware::from_fn_with_state(Role::Contractor, require_role));

    employer.merge(contractor)
}

/// Guard middleware: forward with the session in request extensions, or redirect.
pub async fn require_role(
    State(required): State<Role>,
    mut request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path().to_string();
    let Some(locale) = Locale::from_path(&path) else {
        return StatusCode::NOT_FOUND.into_response();
    };

    let session = current_session(request.headers());

    match guard::authorize(session.as_ref(), required, locale) {
        Access::Granted(session) => {
            debug!(
                required = required.as_str(),
                session.id = %session.id,
                "Page access granted"
            );
            let session = session.clone();
            request.extensions_mut().insert(locale);
            request.extensions_mut().insert(session);
            next.run(request).await
        }
        Access::Login { location } => {
            debug!(required = required.as_str(), %path, "No session, redirecting to login");
            let return_to = request
                .uri()
                .path_and_query()
                .map_or(path.as_str(), |pq| pq.as_str());
            let location = format!("{location}?next={}", urlencoding::encode(return_to));
            Redirect::temporary(&location).into_response()
        }
        Access::WrongRole { location, role } => {
            debug!(
                required = required.as_str(),
                actual = role.as_str(),
                %path,
                "Wrong role, redirecting to role home"
            );
            Redirect::temporary(&location).into_response()
        }
    }
}

async fn page(
    Extension(locale): Extension<Locale>,
    Extension(session): Extension<Session>,
    uri: Uri,
) -> Json<PageModel> {
    let prefix = format!("/{locale}");
    let page = uri
        .path()
        .strip_prefix(&prefix)
        .filter(|rest| !rest.is_empty())
        .unwrap_or("/")
        .to_string();
    let menu = guard::localized_menu(session.role, locale);

    Json(PageModel {
        page,
        locale,
        session,
        menu,
    })
}
