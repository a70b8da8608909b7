//! # ProBau (Session and Access Boundary)
//!
//! `probau` decides who is signed in to the ProBau tender marketplace and which
//! part of the site they may see. Two roles exist: employers (`arbeitsgeber`)
//! publish tenders, contractors (`unternehmer`) bid on them.
//!
//! ## Session Cookie
//!
//! The session lives entirely in the `probau_session` cookie as URL-encoded JSON.
//! There is no server-side store; a cookie that fails to decode or lacks an id,
//! an email or a known role is treated as no session at all.
//!
//! - **Construction:** login and registration normalize the submitted role and
//!   force `isSubscribed` to `false` for employers. Subscribed contractors
//!   default to the `basic` plan.
//! - **Cookie Attributes:** `Path=/`, `HttpOnly`, `SameSite=Lax`, a configurable
//!   `Max-Age`, and `Secure` in production.
//!
//! ## Route Guard
//!
//! Everything below `/{locale}/arbeitsgeber` and `/{locale}/unternehmer` is
//! guarded. Visitors without a session are redirected to the localized login
//! page; signed-in users with the other role are redirected to their own home.
//! Redirect targets always keep the locale prefix.

pub mod cli;
pub mod guard;
pub mod probau;
pub mod session;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};
