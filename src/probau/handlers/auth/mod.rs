//! Cookie session endpoints.
//!
//! Flow Overview:
//! 1. `POST /api/auth/login` (or `/register`) validates the payload, builds a
//!    [`Session`](crate::session::Session) and sets the `probau_session` cookie.
//! 2. `GET /api/auth/session` decodes the cookie; invalid cookies read as `null`.
//! 3. `POST /api/auth/logout` overwrites the cookie with an expired empty value.
//!
//! There is no server-side session store; the cookie carries the whole session.

pub mod login;
pub mod session;
pub mod state;
pub mod types;

pub use state::{AuthState, Environment, SessionConfig};
