//! HTTP handlers for the ProBau session boundary.
//!
//! `auth` owns the session cookie, `pages` the role-gated page trees and
//! `navigation` the role menus; `health` and `root` are plain status endpoints.

pub mod auth;
pub mod health;
pub mod navigation;
pub mod pages;
pub mod root;
