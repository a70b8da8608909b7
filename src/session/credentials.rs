//! Shape a submitted credential payload into a canonical [`Session`].
//!
//! Payloads reach this stage only after request validation, so construction has
//! no error path. The account identifier comes from an [`AccountDirectory`]; the
//! bundled [`PlaceholderAccounts`] hands out one fixed id per role until a real
//! account store is wired in.

use secrecy::SecretString;

use super::{Plan, Role, Session};

/// Validated login or registration input.
#[derive(Debug)]
pub struct Credentials {
    pub email: String,
    /// Never copied into the session.
    pub password: SecretString,
    /// Raw requested role, normalized during construction.
    pub role: String,
    pub company: String,
    pub name: String,
    pub is_subscribed: Option<bool>,
    pub plan: Option<Plan>,
}

/// Source of stable account identifiers.
pub trait AccountDirectory: Send + Sync {
    fn account_id(&self, email: &str, role: Role) -> String;
}

/// Fixed identifier per role (`employer-01`, `contractor-01`).
#[derive(Clone, Debug, Default)]
pub struct PlaceholderAccounts;

impl AccountDirectory for PlaceholderAccounts {
    fn account_id(&self, _email: &str, role: Role) -> String {
        format!("{}-01", role.as_str())
    }
}

impl Credentials {
    /// Build the session for these credentials.
    #[must_use]
    pub fn into_session(self, accounts: &dyn AccountDirectory) -> Session {
        let role = Role::normalize(&self.role);
        let is_subscribed = role == Role::Contractor && self.is_subscribed.unwrap_or(false);
        let plan = if is_subscribed {
            Some(self.plan.unwrap_or(Plan::Basic))
        } else {
            None
        };

        Session {
            id: accounts.account_id(&self.email, role),
            name: self.name,
            email: self.email,
            company: self.company,
            role,
            is_subscribed,
            plan,
        }
    }
}
