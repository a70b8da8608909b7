//! Session model carried in the `probau_session` cookie.
//!
//! The cookie is the session: there is no server-side store. A session is built
//! once from submitted credentials ([`credentials`]), written to the browser as
//! URL-encoded JSON ([`codec`]) and read back on every request by the route guard.
//!
//! Invariants established at construction time (not re-checked on read):
//! - only contractors can be subscribed,
//! - a plan is present only while subscribed.

pub mod codec;
pub mod credentials;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub use codec::{deserialize, serialize};
pub use credentials::{AccountDirectory, Credentials, PlaceholderAccounts};

/// Name of the cookie holding the serialized session.
pub const SESSION_COOKIE_NAME: &str = "probau_session";

/// Account kind. The two values are mutually exclusive.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Tender poster ("Arbeitgeber").
    Employer,
    /// Bidder ("Unternehmer").
    Contractor,
}

impl Role {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Employer => "employer",
            Self::Contractor => "contractor",
        }
    }

    /// Strict parse, used when reading a cookie or validating a payload.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "employer" => Some(Self::Employer),
            "contractor" => Some(Self::Contractor),
            _ => None,
        }
    }

    /// Lenient parse: anything that is not `contractor` is an employer.
    #[must_use]
    pub fn normalize(value: &str) -> Self {
        if value == "contractor" {
            Self::Contractor
        } else {
            Self::Employer
        }
    }

    /// Canonical landing path for the role, without locale prefix.
    #[must_use]
    pub const fn home_path(self) -> &'static str {
        match self {
            Self::Employer => "/arbeitsgeber",
            Self::Contractor => "/unternehmer",
        }
    }
}

/// Subscription tier for contractors.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Plan {
    Basic,
    Pro,
}

impl Plan {
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "basic" => Some(Self::Basic),
            "pro" => Some(Self::Pro),
            _ => None,
        }
    }
}

/// Authenticated identity carried across requests.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: String,
    pub name: String,
    pub email: String,
    pub company: String,
    pub role: Role,
    pub is_subscribed: bool,
    pub plan: Option<Plan>,
}

impl Session {
    #[must_use]
    pub fn has_role(&self, role: Role) -> bool {
        self.role == role
    }
}
