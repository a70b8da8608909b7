//! Session cookie configuration and shared auth state.

use std::sync::Arc;

use crate::{
    guard::Locale,
    session::{AccountDirectory, PlaceholderAccounts},
};

const DEFAULT_SESSION_MAX_AGE_SECONDS: i64 = 30 * 24 * 60 * 60;

/// Deployment environment; production marks cookies `Secure`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "development" | "dev" => Some(Self::Development),
            "production" | "prod" => Some(Self::Production),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Clone, Debug)]
pub struct SessionConfig {
    environment: Environment,
    max_age_seconds: i64,
    default_locale: Locale,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new(Environment::default())
    }
}

impl SessionConfig {
    #[must_use]
    pub fn new(environment: Environment) -> Self {
        Self {
            environment,
            max_age_seconds: DEFAULT_SESSION_MAX_AGE_SECONDS,
            default_locale: Locale::default(),
        }
    }

    #[must_use]
    pub fn with_max_age_seconds(mut self, seconds: i64) -> Self {
        self.max_age_seconds = seconds;
        self
    }

    #[must_use]
    pub fn with_default_locale(mut self, locale: Locale) -> Self {
        self.default_locale = locale;
        self
    }

    #[must_use]
    pub fn environment(&self) -> Environment {
        self.environment
    }

    #[must_use]
    pub fn max_age_seconds(&self) -> i64 {
        self.max_age_seconds
    }

    #[must_use]
    pub fn default_locale(&self) -> Locale {
        self.default_locale
    }

    pub(crate) fn cookie_secure(&self) -> bool {
        self.environment.is_production()
    }
}

/// Shared, read-only state handed to every handler as an `Extension`.
pub struct AuthState {
    config: SessionConfig,
    accounts: Arc<dyn AccountDirectory>,
}

impl AuthState {
    #[must_use]
    pub fn new(config: SessionConfig, accounts: Arc<dyn AccountDirectory>) -> Self {
        Self { config, accounts }
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub(crate) fn accounts(&self) -> &dyn AccountDirectory {
        self.accounts.as_ref()
    }
}

impl From<SessionConfig> for AuthState {
    fn from(config: SessionConfig) -> Self {
        Self::new(config, Arc::new(PlaceholderAccounts))
    }
}

impl std::fmt::Debug for AuthState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthState")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
