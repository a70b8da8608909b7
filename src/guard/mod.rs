//! Role-gated access to page subtrees.
//!
//! Flow Overview: the HTTP layer decodes the session cookie and calls
//! [`authorize`] with the role the subtree requires. The decision is one of:
//! - no session: redirect to the localized login page,
//! - session with another role: redirect to that role's localized home,
//! - matching role: render.
//!
//! The guard never renders a "forbidden" page and never touches the session.
//! Undecodable cookies arrive here as `None` and are handled like a missing one.

pub mod locale;
pub mod navigation;

pub use locale::{localize_path, Locale};
pub use navigation::{localized_menu, menu, MenuEntry};

use crate::session::{Role, Session};

/// Unlocalized login page.
pub const LOGIN_PATH: &str = "/login";

/// Outcome of a guard check.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Access<'a> {
    /// No session: send the visitor to the login page.
    Login { location: String },
    /// Session with a different role: send the user to their own home.
    WrongRole { location: String, role: Role },
    /// Render the subtree for this session.
    Granted(&'a Session),
}

impl Access<'_> {
    /// Redirect target, if the decision is a redirect.
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        match self {
            Self::Login { location } | Self::WrongRole { location, .. } => Some(location.as_str()),
            Self::Granted(_) => None,
        }
    }
}

/// Decide access to a subtree that requires `required`.
#[must_use]
pub fn authorize(session: Option<&Session>, required: Role, locale: Locale) -> Access<'_> {
    match session {
        None => Access::Login {
            location: localize_path(locale, LOGIN_PATH),
        },
        Some(session) if !session.has_role(required) => Access::WrongRole {
            location: localize_path(locale, session.role.home_path()),
            role: session.role,
        },
        Some(session) => Access::Granted(session),
    }
}
